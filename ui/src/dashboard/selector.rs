use dioxus::prelude::*;

use crate::core::TimeRange;

/// Localized option label; the option `value` stays the canonical selector string.
pub(crate) fn range_label(range: TimeRange) -> String {
    match range {
        TimeRange::OneMonth => crate::t!("range-one-month"),
        TimeRange::ThreeMonths => crate::t!("range-three-months"),
        TimeRange::SixMonths => crate::t!("range-six-months"),
    }
}

#[component]
pub fn TimeRangeSelector(value: TimeRange, on_change: EventHandler<TimeRange>) -> Element {
    let _lang = crate::i18n::use_language();
    let on_input = move |evt: FormEvent| {
        on_change.call(TimeRange::from_selector(&evt.value()));
    };

    rsx! {
        div { class: "range-selector",
            label { class: "range-selector__label", r#for: "time-range-select",
                {crate::t!("range-label")}
            }
            select {
                id: "time-range-select",
                class: "range-selector__select",
                value: "{value.selector_value()}",
                oninput: on_input,
                for range in TimeRange::ALL {
                    option {
                        key: "{range.selector_value()}",
                        value: "{range.selector_value()}",
                        selected: range == value,
                        {range_label(range)}
                    }
                }
            }
        }
    }
}
