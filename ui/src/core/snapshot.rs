//! Constant metric snapshots per time range (the dashboard's data provider).
//!
//! The three datasets are literal constants built once on first access and
//! never mutated afterwards. Callers that want to swap in another source (a
//! live feed, a test fixture) go through [`SnapshotSource`]; the UI receives
//! one via context instead of reaching for the statics directly.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::time_range::TimeRange;

/// Number of periods in a contact-complete trend.
pub const TREND_PERIODS: usize = 4;

/// Per-period counts for one contact-complete channel.
pub type Trend = [u64; TREND_PERIODS];

/// A named value inside a metric group. Group order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry<V> {
    pub name: String,
    pub value: V,
}

impl<V> CategoryEntry<V> {
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Collapses a category's value to the scalar used for percentages.
pub trait CategoryTotal {
    fn category_total(&self) -> u64;
}

impl CategoryTotal for u64 {
    fn category_total(&self) -> u64 {
        *self
    }
}

impl CategoryTotal for Trend {
    fn category_total(&self) -> u64 {
        self.iter().copied().fold(0u64, u64::saturating_add)
    }
}

/// Immutable record of the three metric groups for one time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Records completed per channel (Email, Phone, ZIP/Name, TAC).
    pub contact_complete: Vec<CategoryEntry<Trend>>,
    /// Address corrections applied (NCOA, PCOA, PCA).
    pub corrections: Vec<CategoryEntry<u64>>,
    /// Email validation outcome (Valid, Invalid).
    pub email_standardization: Vec<CategoryEntry<u64>>,
}

impl MetricSnapshot {
    fn build(contact: [Trend; 4], corrections: [u64; 3], email: [u64; 2]) -> Self {
        let [email_trend, phone, zip_name, tac] = contact;
        let [ncoa, pcoa, pca] = corrections;
        let [valid, invalid] = email;
        Self {
            contact_complete: vec![
                CategoryEntry::new("Email", email_trend),
                CategoryEntry::new("Phone", phone),
                CategoryEntry::new("ZIP/Name", zip_name),
                CategoryEntry::new("TAC", tac),
            ],
            corrections: vec![
                CategoryEntry::new("NCOA", ncoa),
                CategoryEntry::new("PCOA", pcoa),
                CategoryEntry::new("PCA", pca),
            ],
            email_standardization: vec![
                CategoryEntry::new("Valid", valid),
                CategoryEntry::new("Invalid", invalid),
            ],
        }
    }
}

static ONE_MONTH: Lazy<MetricSnapshot> = Lazy::new(|| {
    MetricSnapshot::build(
        [
            [100_000, 95_000, 90_000, 85_000],
            [100_000, 97_000, 92_000, 90_000],
            [100_000, 90_000, 85_000, 80_000],
            [100_000, 85_000, 80_000, 75_000],
        ],
        [5_000, 2_000, 1_000],
        [90_000, 4_000],
    )
});

static THREE_MONTHS: Lazy<MetricSnapshot> = Lazy::new(|| {
    MetricSnapshot::build(
        [
            [200_000, 180_000, 170_000, 160_000],
            [200_000, 190_000, 180_000, 170_000],
            [200_000, 180_000, 170_000, 160_000],
            [200_000, 170_000, 160_000, 150_000],
        ],
        [10_000, 4_000, 2_000],
        [180_000, 8_000],
    )
});

static SIX_MONTHS: Lazy<MetricSnapshot> = Lazy::new(|| {
    MetricSnapshot::build(
        [
            [300_000, 270_000, 250_000, 240_000],
            [300_000, 290_000, 270_000, 260_000],
            [300_000, 270_000, 250_000, 240_000],
            [300_000, 260_000, 240_000, 230_000],
        ],
        [15_000, 6_000, 3_000],
        [270_000, 12_000],
    )
});

/// Snapshot for a time range.
pub fn get_snapshot(range: TimeRange) -> &'static MetricSnapshot {
    match range {
        TimeRange::OneMonth => &*ONE_MONTH,
        TimeRange::ThreeMonths => &*THREE_MONTHS,
        TimeRange::SixMonths => &*SIX_MONTHS,
    }
}

/// Snapshot for a raw selector string. Unmatched values get the 6-month data.
pub fn snapshot_for_selector(raw: &str) -> &'static MetricSnapshot {
    get_snapshot(TimeRange::from_selector(raw))
}

/// Anything that can hand out a snapshot for a time range.
pub trait SnapshotSource {
    fn snapshot(&self, range: TimeRange) -> MetricSnapshot;
}

/// The built-in constant datasets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticSnapshots;

impl SnapshotSource for StaticSnapshots {
    fn snapshot(&self, range: TimeRange) -> MetricSnapshot {
        get_snapshot(range).clone()
    }
}

impl<F> SnapshotSource for F
where
    F: Fn(TimeRange) -> MetricSnapshot,
{
    fn snapshot(&self, range: TimeRange) -> MetricSnapshot {
        self(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<V>(entries: &[CategoryEntry<V>]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn every_range_has_populated_groups() {
        for range in TimeRange::ALL {
            let snap = get_snapshot(range);
            assert_eq!(names(&snap.contact_complete), ["Email", "Phone", "ZIP/Name", "TAC"]);
            assert_eq!(names(&snap.corrections), ["NCOA", "PCOA", "PCA"]);
            assert_eq!(names(&snap.email_standardization), ["Valid", "Invalid"]);
            assert!(snap.contact_complete.iter().all(|e| e.value.category_total() > 0));
        }
    }

    #[test]
    fn one_month_email_trend() {
        let snap = get_snapshot(TimeRange::OneMonth);
        assert_eq!(snap.contact_complete[0].value, [100_000, 95_000, 90_000, 85_000]);
        assert_eq!(snap.contact_complete[0].value.category_total(), 370_000);
    }

    #[test]
    fn selector_fallback_serves_six_month_data() {
        assert_eq!(snapshot_for_selector("1 Month"), get_snapshot(TimeRange::OneMonth));
        assert_eq!(snapshot_for_selector("3 Months"), get_snapshot(TimeRange::ThreeMonths));
        assert_eq!(snapshot_for_selector("nope"), get_snapshot(TimeRange::SixMonths));
        assert_eq!(snapshot_for_selector("nope").corrections[0].value, 15_000);
    }

    #[test]
    fn snapshots_are_stable_across_calls() {
        let a = get_snapshot(TimeRange::ThreeMonths) as *const MetricSnapshot;
        let b = get_snapshot(TimeRange::ThreeMonths) as *const MetricSnapshot;
        assert_eq!(a, b);
    }

    #[test]
    fn closures_act_as_sources() {
        let source = |_range: TimeRange| get_snapshot(TimeRange::SixMonths).clone();
        assert_eq!(
            source.snapshot(TimeRange::OneMonth),
            StaticSnapshots.snapshot(TimeRange::SixMonths)
        );
    }

    #[test]
    fn trend_total_saturates() {
        let trend: Trend = [u64::MAX, 1, 0, 0];
        assert_eq!(trend.category_total(), u64::MAX);
    }
}
