use dioxus::prelude::*;

use crate::charts::SeriesChart;
use crate::core::{format, ChartSeries, GroupProjection, MetricGroup};
use crate::dashboard::SummaryCards;

fn section_title(group: MetricGroup) -> String {
    match group {
        MetricGroup::ContactComplete => crate::t!("section-contact-title"),
        MetricGroup::Corrections => crate::t!("section-corrections-title"),
        MetricGroup::EmailStandardization => crate::t!("section-email-title"),
    }
}

fn section_goal(group: MetricGroup) -> String {
    match group {
        MetricGroup::ContactComplete => crate::t!("section-contact-goal"),
        MetricGroup::Corrections => crate::t!("section-corrections-goal"),
        MetricGroup::EmailStandardization => crate::t!("section-email-goal"),
    }
}

/// Chart series with title and axis captions in the active language.
fn localized_chart(projection: &GroupProjection) -> ChartSeries {
    let mut chart = projection.chart.clone();
    chart.title = match projection.group {
        MetricGroup::ContactComplete => crate::t!("chart-contact-title"),
        MetricGroup::Corrections => crate::t!("chart-corrections-title"),
        MetricGroup::EmailStandardization => crate::t!("chart-email-title"),
    };
    if let Some(axes) = chart.axes.as_mut() {
        axes.x = crate::t!("chart-axis-category");
        axes.y = crate::t!("chart-axis-count");
        axes.legend = crate::t!("chart-legend-category");
    }
    chart
}

#[component]
pub fn MetricSection(projection: GroupProjection) -> Element {
    let _lang = crate::i18n::use_language();
    let group = projection.group;
    let chart = localized_chart(&projection);
    let total = crate::t!(
        "section-group-total",
        total = format::format_count(projection.grand_total)
    );

    rsx! {
        section { id: "{group.slug()}", class: "metric-section",
            div { class: "metric-section__header",
                h2 { class: "metric-section__title", "{section_title(group)}" }
                span { class: "metric-section__total", "{total}" }
            }
            p { class: "metric-section__goal", "{section_goal(group)}" }
            SummaryCards { group, summaries: projection.summaries.clone() }
            SeriesChart { series: chart }
        }
    }
}
