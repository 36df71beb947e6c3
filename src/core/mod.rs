pub mod axis;
pub mod bar_layout;
pub mod donut_arcs;
pub mod format;
pub mod geometry;
pub mod labels;
pub mod line_path;
pub mod primitives;
pub mod scale;
pub mod types;

pub use axis::{AxisTick, DEFAULT_TICK_COUNT, axis_ticks};
pub use bar_layout::{BarOrientation, DEFAULT_BAR_GAP_RATIO, layout_bars};
pub use donut_arcs::{
    DEFAULT_INNER_RADIUS_RATIO, DonutArc, DonutGeometry, DonutLayout, LegendEntry,
    build_donut_arcs, palette_color,
};
pub use format::{
    ValueFormatter, ValueFormatterFn, format_compact, format_number, format_plain_value,
    format_value,
};
pub use geometry::{LabelPlacement, PathBuilder, Point, Rect, TextAnchor, format_coordinate};
pub use labels::{DEFAULT_MAX_VISIBLE_LABELS, thin_labels};
pub use line_path::{LinePath, build_line_path, line_point_x, line_value_scale};
pub use scale::LinearScale;
pub use types::{DataPoint, Margins, PlotArea, Viewport};
