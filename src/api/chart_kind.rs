use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::ChartResult;

use super::{
    BarChartConfig, ChartOutput, DonutChartConfig, LineChartConfig, build_bar_chart,
    build_donut_chart, build_line_chart,
};

/// Chart type together with its configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "config", rename_all = "snake_case")]
pub enum ChartKind {
    Bar(BarChartConfig),
    Line(LineChartConfig),
    Donut(DonutChartConfig),
}

impl ChartKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bar(_) => "bar",
            Self::Line(_) => "line",
            Self::Donut(_) => "donut",
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Bar(config) => config.validate(),
            Self::Line(config) => config.validate(),
            Self::Donut(config) => config.validate(),
        }
    }

    /// Runs the layout builder matching this chart type.
    pub fn build(&self, series: &[DataPoint]) -> ChartResult<ChartOutput> {
        match self {
            Self::Bar(config) => build_bar_chart(series, config),
            Self::Line(config) => build_line_chart(series, config),
            Self::Donut(config) => build_donut_chart(series, config),
        }
    }
}

impl From<BarChartConfig> for ChartKind {
    fn from(config: BarChartConfig) -> Self {
        Self::Bar(config)
    }
}

impl From<LineChartConfig> for ChartKind {
    fn from(config: LineChartConfig) -> Self {
        Self::Line(config)
    }
}

impl From<DonutChartConfig> for ChartKind {
    fn from(config: DonutChartConfig) -> Self {
        Self::Donut(config)
    }
}
