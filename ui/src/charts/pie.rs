use dioxus::prelude::*;

use crate::charts::geometry::{pie_slices, PieFrame};
use crate::charts::palette::color_at;
use crate::core::{format, ChartSeries};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 380.0;
const LEGEND_X: f64 = 440.0;
const LEGEND_Y: f64 = 96.0;

/// Pie chart; draws a doughnut when the series kind carries a hole.
#[component]
pub fn PieChart(series: ChartSeries) -> Element {
    let _lang = crate::i18n::use_language();
    let kind = series.kind;
    let frame = PieFrame {
        cx: 230.0,
        cy: 210.0,
        radius: 140.0,
        hole_ratio: kind.hole_ratio(),
    };
    let slices = pie_slices(&series.values, &frame);
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let modifier = if kind.hole_ratio() > 0.0 {
        "chart-card--doughnut"
    } else {
        "chart-card--pie"
    };

    rsx! {
        figure { class: "chart-card {modifier}",
            svg {
                class: "chart",
                view_box: "{view_box}",
                role: "img",
                "aria-label": "{series.title}",

                text { class: "chart__title", x: "16", y: "30", "{series.title}" }

                if slices.is_empty() {
                    circle {
                        class: "chart__empty-ring",
                        cx: "{frame.cx}",
                        cy: "{frame.cy}",
                        r: "{frame.radius}",
                    }
                    text {
                        class: "chart__empty",
                        x: "{frame.cx}",
                        y: "{frame.cy}",
                        text_anchor: "middle",
                        dominant_baseline: "middle",
                        {crate::t!("chart-empty")}
                    }
                }

                for slice in slices.iter() {
                    {
                        let name = series.labels.get(slice.index).cloned().unwrap_or_default();
                        let value = series.values.get(slice.index).copied().unwrap_or(0);
                        let label = series.point_label(slice.index);
                        let tooltip = format!("{name}: {}", format::format_count(value));
                        rsx! {
                            g { class: "chart__slice", key: "{name}",
                                path {
                                    d: "{slice.path}",
                                    fill: "{color_at(kind, slice.index)}",
                                    fill_rule: "evenodd",
                                    title { "{tooltip}" }
                                }
                                if let Some(label) = label {
                                    text {
                                        class: "chart__slice-label",
                                        x: "{slice.label_x}",
                                        y: "{slice.label_y}",
                                        text_anchor: "middle",
                                        dominant_baseline: "middle",
                                        if let Some(name) = label.name {
                                            tspan { x: "{slice.label_x}", dy: "-0.6em", "{label.percent}" }
                                            tspan { x: "{slice.label_x}", dy: "1.2em", "{name}" }
                                        } else {
                                            "{label.percent}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                g { class: "chart__legend",
                    for (index , name) in series.labels.iter().enumerate() {
                        {
                            let y = LEGEND_Y + 24.0 * index as f64;
                            rsx! {
                                rect {
                                    x: "{LEGEND_X}",
                                    y: "{y - 10.0}",
                                    width: "12",
                                    height: "12",
                                    rx: "2",
                                    fill: "{color_at(kind, index)}",
                                }
                                text { class: "chart__legend-label", x: "{LEGEND_X + 20.0}", y: "{y}", "{name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
