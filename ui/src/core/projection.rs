//! Summary projection: per-category totals, percentages and chart series.
//!
//! [`project`] is a pure function of a [`MetricSnapshot`]. It runs once per
//! selector change and its output fully replaces the previous one; nothing is
//! cached between calls.
//!
//! Percentages are `100 * total / grand_total` rounded to one decimal (half
//! away from zero). A group whose grand total is zero reports `0.0` for every
//! category instead of dividing by zero.

use dioxus::logger::tracing::debug;
use serde::{Deserialize, Serialize};

use super::snapshot::{CategoryEntry, CategoryTotal, MetricSnapshot};

/// The three metric groups shown on the dashboard, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricGroup {
    ContactComplete,
    Corrections,
    EmailStandardization,
}

impl MetricGroup {
    pub const ALL: [MetricGroup; 3] = [
        Self::ContactComplete,
        Self::Corrections,
        Self::EmailStandardization,
    ];

    /// Chart title for the group.
    pub fn chart_title(self) -> &'static str {
        match self {
            Self::ContactComplete => "Records Completed by Type",
            Self::Corrections => "Standardization and Corrections",
            Self::EmailStandardization => "Email Validation Status",
        }
    }

    /// The single chart kind each group is drawn with.
    pub fn chart_kind(self) -> ChartKind {
        match self {
            Self::ContactComplete => ChartKind::Bar,
            Self::Corrections => ChartKind::Doughnut,
            Self::EmailStandardization => ChartKind::Pie,
        }
    }

    /// Stable identifier (DOM ids, JSON keys).
    pub fn slug(self) -> &'static str {
        match self {
            Self::ContactComplete => "contact-complete",
            Self::Corrections => "corrections",
            Self::EmailStandardization => "email-validation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    /// Pie with a centre hole.
    Doughnut,
    Pie,
}

impl ChartKind {
    /// Inner radius as a fraction of the outer radius.
    pub fn hole_ratio(self) -> f64 {
        match self {
            Self::Doughnut => 0.4,
            Self::Bar | Self::Pie => 0.0,
        }
    }
}

/// What a pie slice label shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceText {
    Percent,
    PercentAndLabel,
}

/// Axis and legend captions for the bar chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitles {
    pub x: String,
    pub y: String,
    pub legend: String,
}

/// One category's contribution to its group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub total: u64,
    /// In `[0, 100]`, one decimal.
    pub percent_of_group: f64,
}

/// Label drawn on a bar or a pie slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointLabel {
    pub percent: String,
    pub name: Option<String>,
}

/// Chart-ready data for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub percentages: Vec<f64>,
    pub slice_text: SliceText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes: Option<AxisTitles>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Label for point `index`: `"25.6%"`, plus the category name when the
    /// series asks for it.
    pub fn point_label(&self, index: usize) -> Option<PointLabel> {
        let pct = *self.percentages.get(index)?;
        let name = match (self.kind, self.slice_text) {
            (ChartKind::Bar, _) | (_, SliceText::Percent) => None,
            (_, SliceText::PercentAndLabel) => self.labels.get(index).cloned(),
        };
        Some(PointLabel {
            percent: format!("{pct:.1}%"),
            name,
        })
    }
}

/// Summaries plus chart for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupProjection {
    pub group: MetricGroup,
    pub grand_total: u64,
    pub summaries: Vec<CategorySummary>,
    pub chart: ChartSeries,
}

/// Everything the dashboard renders for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub contact_complete: GroupProjection,
    pub corrections: GroupProjection,
    pub email_validation: GroupProjection,
}

impl ProjectionResult {
    /// Groups in page order.
    pub fn groups(&self) -> [&GroupProjection; 3] {
        [
            &self.contact_complete,
            &self.corrections,
            &self.email_validation,
        ]
    }

    pub fn group(&self, group: MetricGroup) -> &GroupProjection {
        match group {
            MetricGroup::ContactComplete => &self.contact_complete,
            MetricGroup::Corrections => &self.corrections,
            MetricGroup::EmailStandardization => &self.email_validation,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Project a snapshot into summaries and chart series for all three groups.
pub fn project(snapshot: &MetricSnapshot) -> ProjectionResult {
    ProjectionResult {
        contact_complete: project_group(MetricGroup::ContactComplete, &snapshot.contact_complete),
        corrections: project_group(MetricGroup::Corrections, &snapshot.corrections),
        email_validation: project_group(
            MetricGroup::EmailStandardization,
            &snapshot.email_standardization,
        ),
    }
}

/// Totals and percentages for one group, in input order.
pub fn summarize<V: CategoryTotal>(entries: &[CategoryEntry<V>]) -> Vec<CategorySummary> {
    let totals: Vec<u64> = entries.iter().map(|e| e.value.category_total()).collect();
    let grand_total = sum(&totals);

    entries
        .iter()
        .zip(totals)
        .map(|(entry, total)| CategorySummary {
            name: entry.name.clone(),
            total,
            percent_of_group: percent_of(total, grand_total),
        })
        .collect()
}

/// `100 * part / whole` rounded to one decimal; `0.0` when `whole` is zero.
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_to_tenth(part as f64 / whole as f64 * 100.0)
}

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn project_group<V: CategoryTotal>(
    group: MetricGroup,
    entries: &[CategoryEntry<V>],
) -> GroupProjection {
    let summaries = summarize(entries);
    let grand_total = sum(&summaries.iter().map(|s| s.total).collect::<Vec<_>>());

    if grand_total == 0 {
        debug!(group = group.slug(), "group total is zero, percentages set to 0");
    } else {
        debug!(group = group.slug(), grand_total, "projected group");
    }

    let kind = group.chart_kind();
    let chart = ChartSeries {
        kind,
        title: group.chart_title().to_string(),
        labels: summaries.iter().map(|s| s.name.clone()).collect(),
        values: summaries.iter().map(|s| s.total).collect(),
        percentages: summaries.iter().map(|s| s.percent_of_group).collect(),
        slice_text: match group {
            MetricGroup::EmailStandardization => SliceText::PercentAndLabel,
            _ => SliceText::Percent,
        },
        axes: (kind == ChartKind::Bar).then(|| AxisTitles {
            x: "Category".to_string(),
            y: "Count".to_string(),
            legend: "Category".to_string(),
        }),
    };

    GroupProjection {
        group,
        grand_total,
        summaries,
        chart,
    }
}

fn sum(values: &[u64]) -> u64 {
    values.iter().copied().fold(0u64, u64::saturating_add)
}
