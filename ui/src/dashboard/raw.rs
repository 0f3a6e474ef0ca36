use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::core::{ProjectionResult, TimeRange};

/// Collapsible JSON dump of the projection currently on screen.
#[component]
pub fn RawDataPanel(range: TimeRange, projection: ProjectionResult) -> Element {
    let _lang = crate::i18n::use_language();
    let body = match projection.to_json() {
        Ok(json) => json,
        Err(err) => {
            warn!(%err, "projection serialization failed");
            crate::t!("raw-data-error", error = err.to_string())
        }
    };

    rsx! {
        details { class: "raw-data",
            summary { class: "raw-data__summary",
                {crate::t!("raw-data-summary")}
                span { class: "raw-data__range", " · {range}" }
            }
            pre { class: "raw-data__body", "{body}" }
        }
    }
}
