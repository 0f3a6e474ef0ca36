//! Categorical colour sequences.

use crate::core::ChartKind;

/// Soft pastel sequence used for the bar chart.
pub const PASTEL: [&str; 11] = [
    "rgb(102, 197, 204)",
    "rgb(246, 207, 113)",
    "rgb(248, 156, 116)",
    "rgb(220, 176, 242)",
    "rgb(135, 197, 95)",
    "rgb(158, 185, 243)",
    "rgb(254, 136, 177)",
    "rgb(201, 219, 116)",
    "rgb(139, 224, 164)",
    "rgb(180, 151, 231)",
    "rgb(179, 179, 179)",
];

/// Default qualitative sequence used for pies and doughnuts.
pub const QUALITATIVE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

pub fn palette_for(kind: ChartKind) -> &'static [&'static str] {
    match kind {
        ChartKind::Bar => &PASTEL,
        ChartKind::Doughnut | ChartKind::Pie => &QUALITATIVE,
    }
}

/// Colour for series point `index`, cycling when the palette runs out.
pub fn color_at(kind: ChartKind, index: usize) -> &'static str {
    let palette = palette_for(kind);
    palette[index % palette.len()]
}
