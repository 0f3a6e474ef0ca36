//! Pure layout math for the SVG charts (axis scale, bar rectangles, pie arcs).
//!
//! All coordinates are in SVG user units with the origin top-left. Pie angles
//! are radians measured clockwise from 12 o'clock.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

/// Rectangle the data is drawn into (axes sit outside it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Linear value axis starting at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub max: f64,
    pub step: f64,
}

impl AxisScale {
    /// Pick a "nice" step (1, 2, 2.5 or 5 times a power of ten) so roughly
    /// `target_ticks` intervals cover `max_value`.
    pub fn nice(max_value: f64, target_ticks: usize) -> Self {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Self { max: 1.0, step: 1.0 };
        }
        let raw_step = max_value / target_ticks.max(1) as f64;
        let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
        let normalized = raw_step / magnitude;
        let factor = [1.0, 2.0, 2.5, 5.0, 10.0]
            .into_iter()
            .find(|f| *f + 1e-9 >= normalized)
            .unwrap_or(10.0);
        let step = factor * magnitude;
        let max = (max_value / step - 1e-9).ceil().max(1.0) * step;
        Self { max, step }
    }

    /// Tick values from zero up to and including `max`.
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }

    /// Vertical pixel position of `value` inside `area`.
    pub fn y_for(&self, value: f64, area: &PlotArea) -> f64 {
        let ratio = (value / self.max).clamp(0.0, 1.0);
        area.bottom() - ratio * area.height
    }
}

/// One bar plus the anchor for the label drawn above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal centre of the bar.
    pub center_x: f64,
}

/// Evenly spaced bars, one band per value. `gap_ratio` is the share of each
/// band left empty.
pub fn layout_bars(values: &[u64], scale: &AxisScale, area: &PlotArea, gap_ratio: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let band = area.width / values.len() as f64;
    let width = band * (1.0 - gap_ratio.clamp(0.0, 0.9));
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let top = scale.y_for(*value as f64, area);
            let center_x = area.x + band * (i as f64 + 0.5);
            BarRect {
                x: center_x - width / 2.0,
                y: top,
                width,
                height: area.bottom() - top,
                center_x,
            }
        })
        .collect()
}

/// One wedge of a pie or doughnut.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Index into the series this slice came from.
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
    /// SVG path data (`d` attribute). Draw with `fill-rule: evenodd`.
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
}

/// Centre and radii of a pie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieFrame {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Inner radius as a fraction of `radius`; zero for a plain pie.
    pub hole_ratio: f64,
}

impl PieFrame {
    fn inner_radius(&self) -> f64 {
        self.radius * self.hole_ratio.clamp(0.0, 0.95)
    }

    fn point(&self, r: f64, angle: f64) -> (f64, f64) {
        (self.cx + r * angle.sin(), self.cy - r * angle.cos())
    }
}

/// Slices in series order, starting at 12 o'clock and going clockwise.
/// Zero values get no slice; a zero total yields no slices at all.
pub fn pie_slices(values: &[u64], frame: &PieFrame) -> Vec<PieSlice> {
    let total: f64 = values.iter().map(|v| *v as f64).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let inner = frame.inner_radius();
    let label_r = if inner > 0.0 {
        (frame.radius + inner) / 2.0
    } else {
        frame.radius * 0.62
    };

    let mut start = 0.0;
    let mut slices = Vec::new();
    for (index, value) in values.iter().enumerate() {
        if *value == 0 {
            continue;
        }
        let fraction = *value as f64 / total;
        let end = (start + fraction * TAU).min(TAU);
        let mid = (start + end) / 2.0;
        let (label_x, label_y) = frame.point(label_r, mid);
        let path = if fraction >= 1.0 - 1e-9 {
            full_ring_path(frame, inner)
        } else {
            wedge_path(frame, inner, start, end)
        };
        slices.push(PieSlice {
            index,
            start,
            end,
            fraction,
            path,
            label_x,
            label_y,
        });
        start = end;
    }
    slices
}

fn wedge_path(frame: &PieFrame, inner: f64, start: f64, end: f64) -> String {
    let r = frame.radius;
    let large_arc = u8::from(end - start > PI);
    let (ox0, oy0) = frame.point(r, start);
    let (ox1, oy1) = frame.point(r, end);

    let mut d = String::new();
    if inner > 0.0 {
        let (ix1, iy1) = frame.point(inner, end);
        let (ix0, iy0) = frame.point(inner, start);
        let _ = write!(
            d,
            "M{ox0:.2},{oy0:.2} A{r:.2},{r:.2} 0 {large_arc} 1 {ox1:.2},{oy1:.2} \
             L{ix1:.2},{iy1:.2} A{inner:.2},{inner:.2} 0 {large_arc} 0 {ix0:.2},{iy0:.2} Z"
        );
    } else {
        let (cx, cy) = (frame.cx, frame.cy);
        let _ = write!(
            d,
            "M{cx:.2},{cy:.2} L{ox0:.2},{oy0:.2} A{r:.2},{r:.2} 0 {large_arc} 1 {ox1:.2},{oy1:.2} Z"
        );
    }
    d
}

/// A single slice covering the whole circle. Two half arcs, since one arc
/// with identical endpoints draws nothing.
fn full_ring_path(frame: &PieFrame, inner: f64) -> String {
    let (cx, cy, r) = (frame.cx, frame.cy, frame.radius);
    let mut d = String::new();
    let _ = write!(
        d,
        "M{cx:.2},{top:.2} A{r:.2},{r:.2} 0 1 1 {cx:.2},{bottom:.2} A{r:.2},{r:.2} 0 1 1 {cx:.2},{top:.2} Z",
        top = cy - r,
        bottom = cy + r
    );
    if inner > 0.0 {
        let _ = write!(
            d,
            " M{cx:.2},{top:.2} A{inner:.2},{inner:.2} 0 1 0 {cx:.2},{bottom:.2} A{inner:.2},{inner:.2} 0 1 0 {cx:.2},{top:.2} Z",
            top = cy - inner,
            bottom = cy + inner
        );
    }
    d
}
