use serde::{Deserialize, Serialize};

use crate::core::{
    LabelPlacement, LinearScale, PlotArea, Point, TextAnchor, ValueFormatter, axis_ticks,
    format_plain_value,
};

pub(super) const AXIS_LABEL_GAP_PX: f64 = 8.0;
pub(super) const CATEGORY_LABEL_OFFSET_PX: f64 = 18.0;
/// Nudges label baselines so text reads as vertically centered on a position.
pub(super) const TEXT_BASELINE_NUDGE_PX: f64 = 4.0;

/// Gridline across the plot at one axis tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
    pub value: f64,
}

#[derive(Debug, Default)]
pub(super) struct ValueAxis {
    pub gridlines: Vec<GridLine>,
    pub labels: Vec<LabelPlacement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ValueAxisSide {
    /// Values grow upward; labels sit left of the plot, gridlines are horizontal.
    Left,
    /// Values grow rightward; labels sit under the plot, gridlines are vertical.
    Bottom,
}

pub(super) fn build_value_axis(
    scale: LinearScale,
    plot: PlotArea,
    side: ValueAxisSide,
    tick_count: usize,
    show_grid: bool,
    formatter: Option<&ValueFormatter>,
) -> ValueAxis {
    let mut axis = ValueAxis::default();
    for tick in axis_ticks(scale, tick_count) {
        let text = format_plain_value(tick.value, formatter);
        let (label, gridline) = match side {
            ValueAxisSide::Left => (
                LabelPlacement::new(
                    plot.x - AXIS_LABEL_GAP_PX,
                    tick.position + TEXT_BASELINE_NUDGE_PX,
                    text,
                    TextAnchor::End,
                ),
                GridLine {
                    from: Point::new(plot.x, tick.position),
                    to: Point::new(plot.right(), tick.position),
                    value: tick.value,
                },
            ),
            ValueAxisSide::Bottom => (
                LabelPlacement::new(
                    tick.position,
                    plot.baseline() + CATEGORY_LABEL_OFFSET_PX,
                    text,
                    TextAnchor::Middle,
                ),
                GridLine {
                    from: Point::new(tick.position, plot.y),
                    to: Point::new(tick.position, plot.baseline()),
                    value: tick.value,
                },
            ),
        };
        axis.labels.push(label);
        if show_grid {
            axis.gridlines.push(gridline);
        }
    }
    axis
}
