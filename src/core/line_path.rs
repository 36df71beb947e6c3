use serde::{Deserialize, Serialize};

use crate::core::types::ensure_finite_values;
use crate::core::{DataPoint, LabelPlacement, LinearScale, PathBuilder, PlotArea, Point, TextAnchor};
use crate::error::ChartResult;

/// Deterministic geometry for a line series.
///
/// `line_path` joins the points with straight segments. `area_path` follows
/// the same points, drops to the plot baseline and closes back to the first
/// point's x, forming a fillable region. `points` carries one placement per
/// data point with the category label as text. `scale` is the vertical scale
/// the points were placed with, absent for an empty series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    pub line_path: String,
    pub area_path: String,
    pub points: Vec<LabelPlacement>,
    pub scale: Option<LinearScale>,
}

impl LinePath {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_path: String::new(),
            area_path: String::new(),
            points: Vec::new(),
            scale: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Vertical scale used by line charts: data min/max onto the plot, inverted
/// so larger values sit higher.
pub fn line_value_scale(series: &[DataPoint], plot: PlotArea) -> ChartResult<LinearScale> {
    let values: Vec<f64> = series.iter().map(|point| point.value).collect();
    LinearScale::from_values(&values, plot.baseline(), plot.y)
}

/// Horizontal position of point `index` among `len` evenly spread points.
///
/// A single point sits at the horizontal center of the plot.
#[must_use]
pub fn line_point_x(index: usize, len: usize, plot: PlotArea) -> f64 {
    if len <= 1 {
        return plot.center_x();
    }
    plot.x + (index as f64 / (len - 1) as f64) * plot.width
}

pub fn build_line_path(series: &[DataPoint], plot: PlotArea) -> ChartResult<LinePath> {
    plot.validate()?;
    ensure_finite_values(series)?;
    if series.is_empty() {
        return Ok(LinePath::empty());
    }

    let scale = line_value_scale(series, plot)?;
    let vertices: Vec<Point> = series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            Point::new(
                line_point_x(index, series.len(), plot),
                scale.map(point.value),
            )
        })
        .collect();

    let mut line = PathBuilder::new();
    for (index, vertex) in vertices.iter().enumerate() {
        line = if index == 0 {
            line.move_to(*vertex)
        } else {
            line.line_to(*vertex)
        };
    }

    let first = vertices[0];
    let last = vertices[vertices.len() - 1];
    let baseline = plot.baseline();
    let area = line
        .clone()
        .line_to(Point::new(last.x, baseline))
        .line_to(Point::new(first.x, baseline))
        .close();

    let points = series
        .iter()
        .zip(&vertices)
        .map(|(point, vertex)| {
            LabelPlacement::new(vertex.x, vertex.y, point.label.clone(), TextAnchor::Middle)
        })
        .collect();

    Ok(LinePath {
        line_path: line.build(),
        area_path: area.build(),
        points,
        scale: Some(scale),
    })
}
