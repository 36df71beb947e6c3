use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    DataPoint, DonutArc, DonutGeometry, LabelPlacement, LegendEntry, Point, TextAnchor, Viewport,
    build_donut_arcs, format_value,
};
use crate::error::ChartResult;

use super::value_axis::TEXT_BASELINE_NUDGE_PX;
use super::{ChartOutput, DonutChartConfig, NoDataPlaceholder};

/// Complete geometry for one donut or pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutChart {
    pub viewport: Viewport,
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub arcs: Vec<DonutArc>,
    /// Empty when the legend is disabled.
    pub legend: Vec<LegendEntry>,
    pub total: f64,
    /// Formatted total in the hole; absent for pie charts.
    pub total_label: Option<LabelPlacement>,
}

/// Lays out a donut chart.
///
/// Both an empty series and a series summing to zero produce the no-data
/// placeholder.
pub fn build_donut_chart(
    series: &[DataPoint],
    config: &DonutChartConfig,
) -> ChartResult<ChartOutput> {
    config.validate()?;
    let viewport = config.viewport();
    if series.is_empty() {
        debug!(kind = "donut", "empty series, emitting no-data placeholder");
        return Ok(ChartOutput::NoData(NoDataPlaceholder::new(viewport)));
    }

    let radius = config.size * 0.5;
    let center = Point::new(radius, radius);
    let geometry = DonutGeometry::new(center, radius, config.inner_radius);
    let formatter = config.format_value.as_ref();
    let layout = build_donut_arcs(series, geometry, &config.colors, formatter)?;
    if layout.is_empty() {
        debug!(kind = "donut", points = series.len(), "zero total, emitting no-data placeholder");
        return Ok(ChartOutput::NoData(NoDataPlaceholder::new(viewport)));
    }

    let inner_radius = geometry.inner_radius();
    let total_label = (inner_radius > 0.0).then(|| {
        LabelPlacement::new(
            center.x,
            center.y + TEXT_BASELINE_NUDGE_PX,
            format_value(layout.total, formatter),
            TextAnchor::Middle,
        )
    });

    debug!(
        kind = "donut",
        arcs = layout.arcs.len(),
        total = layout.total,
        "donut chart laid out"
    );

    Ok(ChartOutput::Donut(DonutChart {
        viewport,
        center,
        outer_radius: radius,
        inner_radius,
        arcs: layout.arcs,
        legend: if config.show_legend {
            layout.legend
        } else {
            Vec::new()
        },
        total: layout.total,
        total_label,
    }))
}
