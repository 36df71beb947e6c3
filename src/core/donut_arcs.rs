use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use crate::core::types::ensure_finite_values;
use crate::core::{DataPoint, PathBuilder, Point, ValueFormatter, format_value};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DEFAULT_PALETTE};

pub const DEFAULT_INNER_RADIUS_RATIO: f64 = 0.6;

/// Circle the donut is drawn on.
///
/// `inner_radius_ratio` is the hole radius as a fraction of `outer_radius`;
/// `0` produces pie wedges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutGeometry {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius_ratio: f64,
}

impl DonutGeometry {
    #[must_use]
    pub const fn new(center: Point, outer_radius: f64, inner_radius_ratio: f64) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius_ratio,
        }
    }

    #[must_use]
    pub fn inner_radius(self) -> f64 {
        self.outer_radius * self.inner_radius_ratio
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(ChartError::InvalidData(
                "donut center must be finite".to_owned(),
            ));
        }
        if !self.outer_radius.is_finite() || self.outer_radius <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "donut outer radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.inner_radius_ratio.is_finite() || !(0.0..1.0).contains(&self.inner_radius_ratio)
        {
            return Err(ChartError::InvalidConfig(
                "donut inner radius ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One donut segment. Angles are radians measured clockwise from 3 o'clock,
/// so the first segment starts at `-PI / 2` (12 o'clock).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutArc {
    pub path: String,
    pub color: Color,
    pub start_angle: f64,
    pub end_angle: f64,
    pub percentage: f64,
    pub large_arc: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub value: f64,
    /// Share of the total in `[0, 100]`, unrounded.
    pub percentage: f64,
    /// Share rendered with one decimal place, e.g. `25.0%`.
    pub percentage_text: String,
    pub formatted_value: String,
    pub color: Color,
}

/// Arcs and legend for a donut chart, both ordered like the input series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutLayout {
    pub arcs: Vec<DonutArc>,
    pub legend: Vec<LegendEntry>,
    pub total: f64,
}

impl DonutLayout {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            arcs: Vec::new(),
            legend: Vec::new(),
            total: 0.0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Picks the segment color, cycling `palette` when the series is longer.
///
/// An empty palette falls back to `DEFAULT_PALETTE`.
#[must_use]
pub fn palette_color(palette: &[Color], index: usize) -> Color {
    let palette = if palette.is_empty() {
        &DEFAULT_PALETTE[..]
    } else {
        palette
    };
    palette[index % palette.len()]
}

/// Converts each value's share of the total into an arc path.
///
/// A zero total (empty or all-zero series) yields `DonutLayout::empty()`.
/// The large-arc flag is set only for shares strictly above 50%. A segment
/// holding the whole total is drawn as two half-circle arcs per ring, and so
/// is one close enough to the whole that its arc ends where it starts.
pub fn build_donut_arcs(
    series: &[DataPoint],
    geometry: DonutGeometry,
    palette: &[Color],
    formatter: Option<&ValueFormatter>,
) -> ChartResult<DonutLayout> {
    geometry.validate()?;
    ensure_finite_values(series)?;
    if let Some(point) = series.iter().find(|point| point.value < 0.0) {
        return Err(ChartError::InvalidData(format!(
            "donut value for `{}` must be >= 0",
            point.label
        )));
    }

    let total: f64 = series.iter().map(|point| point.value).sum();
    if total == 0.0 {
        return Ok(DonutLayout::empty());
    }

    // (percentage, cumulative percentage before this segment)
    let shares = series.iter().fold(
        Vec::with_capacity(series.len()),
        |mut shares: Vec<(f64, f64)>, point| {
            let before = shares
                .last()
                .map_or(0.0, |(percentage, before)| before + percentage);
            shares.push((point.value / total * 100.0, before));
            shares
        },
    );

    let mut arcs = Vec::with_capacity(series.len());
    let mut legend = Vec::with_capacity(series.len());
    for (index, (point, (percentage, before))) in series.iter().zip(shares).enumerate() {
        let start_angle = before / 100.0 * TAU - FRAC_PI_2;
        let end_angle = start_angle + percentage / 100.0 * TAU;
        let large_arc = percentage > 50.0;
        let color = palette_color(palette, index);

        let path = if point.value >= total {
            full_ring_path(geometry, start_angle)
        } else {
            segment_path(geometry, start_angle, end_angle, large_arc)
        };

        arcs.push(DonutArc {
            path,
            color,
            start_angle,
            end_angle,
            percentage,
            large_arc,
        });
        legend.push(LegendEntry {
            label: point.label.clone(),
            value: point.value,
            percentage,
            percentage_text: format!("{percentage:.1}%"),
            formatted_value: format_value(point.value, formatter),
            color,
        });
    }

    Ok(DonutLayout {
        arcs,
        legend,
        total,
    })
}

fn segment_path(geometry: DonutGeometry, start_angle: f64, end_angle: f64, large_arc: bool) -> String {
    let center = geometry.center;
    let outer = geometry.outer_radius;
    let inner = geometry.inner_radius();

    let path = PathBuilder::new().move_to(Point::on_circle(center, outer, start_angle));
    let path = ring_arc(path, geometry, outer, (start_angle, end_angle), large_arc, true);

    let path = if inner > 0.0 {
        let path = path.line_to(Point::on_circle(center, inner, end_angle));
        ring_arc(path, geometry, inner, (end_angle, start_angle), large_arc, false)
    } else {
        path.line_to(center)
    };
    path.close().build()
}

/// Appends the arc from `angles.0` to `angles.1`.
///
/// A large arc whose endpoints print identically would be dropped by SVG
/// renderers, so it is split at its middle angle into two arcs of at most
/// half a turn each.
fn ring_arc(
    path: PathBuilder,
    geometry: DonutGeometry,
    radius: f64,
    (from_angle, to_angle): (f64, f64),
    large_arc: bool,
    sweep: bool,
) -> PathBuilder {
    let center = geometry.center;
    let from = Point::on_circle(center, radius, from_angle);
    let to = Point::on_circle(center, radius, to_angle);
    if !large_arc || !from.rounds_to(to) {
        return path.arc_to(radius, large_arc, sweep, to);
    }

    let middle = Point::on_circle(center, radius, (from_angle + to_angle) * 0.5);
    path.arc_to(radius, false, sweep, middle)
        .arc_to(radius, false, sweep, to)
}

/// A single arc command cannot start and end on the same point, so the full
/// circle is split at the opposite angle. The inner ring runs counter-clockwise
/// to leave a hole under the nonzero fill rule.
fn full_ring_path(geometry: DonutGeometry, start_angle: f64) -> String {
    let center = geometry.center;
    let outer = geometry.outer_radius;
    let inner = geometry.inner_radius();
    let opposite = start_angle + PI;

    let outer_start = Point::on_circle(center, outer, start_angle);
    let path = PathBuilder::new()
        .move_to(outer_start)
        .arc_to(outer, false, true, Point::on_circle(center, outer, opposite))
        .arc_to(outer, false, true, outer_start)
        .close();
    if inner <= 0.0 {
        return path.build();
    }

    let inner_start = Point::on_circle(center, inner, start_angle);
    path.move_to(inner_start)
        .arc_to(inner, false, false, Point::on_circle(center, inner, opposite))
        .arc_to(inner, false, false, inner_start)
        .close()
        .build()
}
