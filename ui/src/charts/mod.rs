//! SVG chart components fed by [`ChartSeries`](crate::core::ChartSeries).

pub mod geometry;
pub mod palette;

mod bar;
pub use bar::BarChart;

mod pie;
pub use pie::PieChart;

use dioxus::prelude::*;

use crate::core::{ChartKind, ChartSeries};

/// Picks the chart component matching the series kind.
#[component]
pub fn SeriesChart(series: ChartSeries) -> Element {
    match series.kind {
        ChartKind::Bar => rsx! { BarChart { series } },
        ChartKind::Doughnut | ChartKind::Pie => rsx! { PieChart { series } },
    }
}
