use serde::{Deserialize, Serialize};

use crate::core::{LabelPlacement, TextAnchor, Viewport};

use super::{BarChart, DonutChart, LineChart};

pub const NO_DATA_MESSAGE: &str = "No data available";

/// Placeholder returned instead of geometry when there is nothing to chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoDataPlaceholder {
    pub viewport: Viewport,
    pub label: LabelPlacement,
}

impl NoDataPlaceholder {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            label: LabelPlacement::new(
                viewport.width * 0.5,
                viewport.height * 0.5,
                NO_DATA_MESSAGE,
                TextAnchor::Middle,
            ),
        }
    }
}

/// Renderable description produced by one chart build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartOutput {
    NoData(NoDataPlaceholder),
    Bar(BarChart),
    Line(LineChart),
    Donut(DonutChart),
}

impl ChartOutput {
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData(_))
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        match self {
            Self::NoData(placeholder) => placeholder.viewport,
            Self::Bar(chart) => chart.viewport,
            Self::Line(chart) => chart.viewport,
            Self::Donut(chart) => chart.viewport,
        }
    }

    #[must_use]
    pub fn as_bar(&self) -> Option<&BarChart> {
        match self {
            Self::Bar(chart) => Some(chart),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_line(&self) -> Option<&LineChart> {
        match self {
            Self::Line(chart) => Some(chart),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_donut(&self) -> Option<&DonutChart> {
        match self {
            Self::Donut(chart) => Some(chart),
            _ => None,
        }
    }
}
