//! estate-charts: deterministic chart geometry for property-management dashboards.
//!
//! Bar, line and donut charts are laid out from a labeled series into plain
//! vector geometry (rectangles, SVG path data, label placements). The host
//! draws the result; nothing here touches a UI toolkit.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use crate::api::{ChartEngine, ChartKind, ChartOutput};
pub use crate::core::DataPoint;
pub use crate::error::{ChartError, ChartResult};
