//! Time-range buckets offered by the dashboard selector.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use dioxus::logger::tracing::debug;
use serde::{Deserialize, Serialize};

/// One of the three fixed reporting windows.
///
/// Selector values arriving from the UI boundary are plain strings. Only the
/// exact values `"1 Month"` and `"3 Months"` select the shorter windows; every
/// other string (including typos and the empty string) resolves to
/// [`TimeRange::SixMonths`]. See [`TimeRange::from_selector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
}

impl TimeRange {
    /// Selector order (also the order options are presented in).
    pub const ALL: [TimeRange; 3] = [Self::OneMonth, Self::ThreeMonths, Self::SixMonths];

    /// Canonical selector value used on the wire (option `value` attribute).
    pub fn selector_value(self) -> &'static str {
        match self {
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
        }
    }

    /// Resolve a raw selector value.
    ///
    /// Exact match only. Anything that is not `"1 Month"` or `"3 Months"`
    /// falls through to the six-month bucket.
    pub fn from_selector(raw: &str) -> Self {
        match raw {
            "1 Month" => Self::OneMonth,
            "3 Months" => Self::ThreeMonths,
            "6 Months" => Self::SixMonths,
            other => {
                debug!(selector = other, "unrecognised time range, using 6 Months");
                Self::SixMonths
            }
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector_value())
    }
}

impl FromStr for TimeRange {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl From<&str> for TimeRange {
    fn from(raw: &str) -> Self {
        Self::from_selector(raw)
    }
}
