use dioxus::prelude::*;

use crate::charts::geometry::{layout_bars, AxisScale, PlotArea};
use crate::charts::palette::color_at;
use crate::core::{format, ChartSeries};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 380.0;
const PLOT: PlotArea = PlotArea {
    x: 78.0,
    y: 64.0,
    width: 400.0,
    height: 240.0,
};
const LEGEND_X: f64 = 504.0;

/// Vertical bar chart with the percentage share printed above each bar.
#[component]
pub fn BarChart(series: ChartSeries) -> Element {
    let scale = AxisScale::nice(series.max_value() as f64, 4);
    let bars = layout_bars(&series.values, &scale, &PLOT, 0.3);
    let ticks = scale.ticks();
    let axes = series.axes.clone().unwrap_or_default();
    let kind = series.kind;

    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let x_title_x = PLOT.x + PLOT.width / 2.0;
    let x_title_y = PLOT.bottom() + 52.0;
    let y_title_y = PLOT.y + PLOT.height / 2.0;
    let y_title_transform = format!("rotate(-90 18 {y_title_y})");

    rsx! {
        figure { class: "chart-card chart-card--bar",
            svg {
                class: "chart",
                view_box: "{view_box}",
                role: "img",
                "aria-label": "{series.title}",

                text { class: "chart__title", x: "16", y: "30", "{series.title}" }

                // grid + y ticks
                for tick in ticks {
                    {
                        let y = scale.y_for(tick, &PLOT);
                        let label = format::format_tick(tick);
                        rsx! {
                            line {
                                class: "chart__grid",
                                x1: "{PLOT.x}",
                                x2: "{PLOT.right()}",
                                y1: "{y}",
                                y2: "{y}",
                            }
                            text {
                                class: "chart__tick",
                                x: "{PLOT.x - 8.0}",
                                y: "{y}",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                "{label}"
                            }
                        }
                    }
                }

                for (index , bar) in bars.iter().enumerate() {
                    {
                        let name = series.labels.get(index).cloned().unwrap_or_default();
                        let value = series.values.get(index).copied().unwrap_or(0);
                        let percent = series
                            .point_label(index)
                            .map(|label| label.percent)
                            .unwrap_or_default();
                        let tooltip = format!("{name}: {}", format::format_count(value));
                        rsx! {
                            g { class: "chart__bar", key: "{name}",
                                rect {
                                    x: "{bar.x}",
                                    y: "{bar.y}",
                                    width: "{bar.width}",
                                    height: "{bar.height}",
                                    fill: "{color_at(kind, index)}",
                                    title { "{tooltip}" }
                                }
                                text {
                                    class: "chart__value",
                                    x: "{bar.center_x}",
                                    y: "{bar.y - 6.0}",
                                    text_anchor: "middle",
                                    "{percent}"
                                }
                                text {
                                    class: "chart__category",
                                    x: "{bar.center_x}",
                                    y: "{PLOT.bottom() + 20.0}",
                                    text_anchor: "middle",
                                    "{name}"
                                }
                            }
                        }
                    }
                }

                line {
                    class: "chart__axis",
                    x1: "{PLOT.x}",
                    x2: "{PLOT.right()}",
                    y1: "{PLOT.bottom()}",
                    y2: "{PLOT.bottom()}",
                }
                text {
                    class: "chart__axis-title",
                    x: "{x_title_x}",
                    y: "{x_title_y}",
                    text_anchor: "middle",
                    "{axes.x}"
                }
                text {
                    class: "chart__axis-title",
                    x: "18",
                    y: "{y_title_y}",
                    text_anchor: "middle",
                    transform: "{y_title_transform}",
                    "{axes.y}"
                }

                // legend
                g { class: "chart__legend",
                    text { class: "chart__legend-title", x: "{LEGEND_X}", y: "{PLOT.y}", "{axes.legend}" }
                    for (index , name) in series.labels.iter().enumerate() {
                        {
                            let y = PLOT.y + 22.0 * (index as f64 + 1.0);
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
