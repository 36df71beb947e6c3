use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::ensure_finite_values;
use crate::core::{DataPoint, LinearScale, PlotArea, Rect};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_BAR_GAP_RATIO: f64 = 0.2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarOrientation {
    /// Bars grow upward from the plot bottom; categories run left to right.
    #[default]
    Vertical,
    /// Bars grow rightward from the plot left edge; categories run top to bottom.
    Horizontal,
}

/// Computes one rectangle per data point inside `plot`.
///
/// The category axis is split into equal bands and each bar fills
/// `1 - bar_gap_ratio` of its band, centered. Bar length is scaled against
/// `[0, max(value)]`; a zero maximum is substituted with `1`, and negative
/// values collapse to zero length.
pub fn layout_bars(
    series: &[DataPoint],
    plot: PlotArea,
    bar_gap_ratio: f64,
    orientation: BarOrientation,
) -> ChartResult<Vec<Rect>> {
    if !bar_gap_ratio.is_finite() || !(0.0..1.0).contains(&bar_gap_ratio) {
        return Err(ChartError::InvalidConfig(
            "bar gap ratio must be finite and in [0, 1)".to_owned(),
        ));
    }
    plot.validate()?;
    ensure_finite_values(series)?;

    if series.is_empty() {
        return Ok(Vec::new());
    }

    let max_value = series
        .iter()
        .map(|point| OrderedFloat(point.value))
        .max()
        .map_or(0.0, |max| max.0);
    let (category_extent, value_extent) = match orientation {
        BarOrientation::Vertical => (plot.width, plot.height),
        BarOrientation::Horizontal => (plot.height, plot.width),
    };
    let scale = LinearScale::from_zero(max_value, 0.0, value_extent)?;

    let band = category_extent / series.len() as f64;
    let thickness = band * (1.0 - bar_gap_ratio);
    let inset = (band - thickness) * 0.5;

    let rects = series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let length = scale.map(point.value).clamp(0.0, value_extent);
            let offset = index as f64 * band + inset;
            match orientation {
                BarOrientation::Vertical => Rect::new(
                    plot.x + offset,
                    plot.baseline() - length,
                    thickness,
                    length,
                ),
                BarOrientation::Horizontal => {
                    Rect::new(plot.x, plot.y + offset, length, thickness)
                }
            }
        })
        .collect();

    Ok(rects)
}
