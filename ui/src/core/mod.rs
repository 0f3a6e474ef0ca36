//! Data model and pure projection logic. Nothing in here touches the UI.

pub mod format;
pub mod projection;
pub mod snapshot;
pub mod time_range;

pub use projection::{
    project, ChartKind, ChartSeries, CategorySummary, GroupProjection, MetricGroup,
    ProjectionResult,
};
pub use snapshot::{get_snapshot, snapshot_for_selector, MetricSnapshot, SnapshotSource, StaticSnapshots};
pub use time_range::TimeRange;
