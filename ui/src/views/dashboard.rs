use dioxus::prelude::*;

use crate::dashboard::{DashboardSettings, HygieneDashboard};

/// Routed page. Localized children subscribe to the language signal
/// themselves, so a switch re-renders them without remounting the page.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "page page-dashboard",
            HygieneDashboard { settings: DashboardSettings::default() }
        }
    }
}
