//! The Hygiene Summary dashboard: selector, three metric sections, raw data.
//!
//! The snapshot provider is injected through Dioxus context
//! ([`DataSource`]); platform roots provide one, and the dashboard falls back
//! to the built-in constants when none is provided. Each selector change
//! stores the new [`TimeRange`] in a signal, and the projection memo
//! re-derives all six outputs from it in one synchronous pass.

mod cards;
pub use cards::{card_heading, SummaryCards};

mod raw;
pub use raw::RawDataPanel;

mod section;
pub use section::MetricSection;

mod selector;
pub use selector::TimeRangeSelector;

use std::fmt;
use std::rc::Rc;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::core::{project, MetricSnapshot, SnapshotSource, StaticSnapshots, TimeRange};

/// Shared handle to whatever serves metric snapshots.
#[derive(Clone)]
pub struct DataSource(Rc<dyn SnapshotSource>);

impl DataSource {
    pub fn new(source: impl SnapshotSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn snapshot(&self, range: TimeRange) -> MetricSnapshot {
        self.0.snapshot(range)
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new(StaticSnapshots)
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSource").finish_non_exhaustive()
    }
}

/// Dashboard knobs a platform root may override.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub initial_range: TimeRange,
    /// Show the collapsible JSON dump under the charts.
    pub show_raw_data: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            initial_range: TimeRange::OneMonth,
            show_raw_data: true,
        }
    }
}

#[component]
pub fn HygieneDashboard(#[props(default)] settings: DashboardSettings) -> Element {
    let lang = crate::i18n::use_language();
    let source = try_use_context::<DataSource>().unwrap_or_default();
    let mut range = use_signal(|| settings.initial_range);

    let projection = use_memo(move || {
        let snapshot = source.snapshot(range());
        project(&snapshot)
    });

    let on_range_change = move |next: TimeRange| {
        info!(range = %next, "time range changed");
        range.set(next);
    };

    let result = projection();

    rsx! {
        div { class: "dashboard", lang: "{lang}",
            header { class: "dashboard__header",
                h1 { class: "dashboard__title", {crate::t!("page-title")} }
                p { class: "dashboard__description", {crate::t!("page-description")} }
                TimeRangeSelector { value: range(), on_change: on_range_change }
            }

            for group in result.groups() {
                MetricSection { key: "{group.group.slug()}", projection: group.clone() }
            }

            if settings.show_raw_data {
                RawDataPanel { range: range(), projection: result.clone() }
            }
        }
    }
}
