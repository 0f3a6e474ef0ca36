use dioxus::prelude::*;

use crate::core::{format, CategorySummary, MetricGroup};

/// Card heading: contact-complete channels read "Email Appends", the other
/// groups show the bare category name.
pub fn card_heading(group: MetricGroup, name: &str) -> String {
    match group {
        MetricGroup::ContactComplete => crate::t!("card-appends", name = name.to_string()),
        MetricGroup::Corrections | MetricGroup::EmailStandardization => name.to_string(),
    }
}

/// One card per category: total on the left, share of the group on the right.
#[component]
pub fn SummaryCards(group: MetricGroup, summaries: Vec<CategorySummary>) -> Element {
    let _lang = crate::i18n::use_language();
    let modifier = match group {
        MetricGroup::ContactComplete => "summary-cards--quad",
        MetricGroup::Corrections | MetricGroup::EmailStandardization => "summary-cards--wide",
    };
    let total_label = crate::t!("card-total-label");
    let share_label = crate::t!("card-share-label");

    rsx! {
        div { id: "{group.slug()}-blocks", class: "summary-cards {modifier}",
            for summary in summaries.iter() {
                div { class: "summary-card", key: "{summary.name}",
                    h4 { class: "summary-card__heading", "{card_heading(group, &summary.name)}" }
                    div { class: "summary-card__body",
                        div { class: "summary-card__cell",
                            span { class: "summary-card__value", "{format::format_count(summary.total)}" }
                            span { class: "summary-card__caption", "{total_label}" }
                        }
                        div { class: "summary-card__divider", aria_hidden: "true" }
                        div { class: "summary-card__cell",
                            span { class: "summary-card__value", "{format::format_percent(summary.percent_of_group)}" }
                            span { class: "summary-card__caption", "{share_label}" }
                        }
                    }
                }
            }
        }
    }
}
