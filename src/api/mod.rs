mod bar_chart;
mod batch;
mod chart_config;
mod chart_kind;
mod chart_output;
mod donut_chart;
mod engine;
mod json_contract;
mod line_chart;
mod render_frame_builder;
mod value_axis;

pub use bar_chart::{BarChart, BarShape, build_bar_chart};
pub use batch::{ChartRequest, build_batch};
pub use chart_config::{BarChartConfig, DonutChartConfig, LineChartConfig};
pub use chart_kind::ChartKind;
pub use chart_output::{ChartOutput, NO_DATA_MESSAGE, NoDataPlaceholder};
pub use donut_chart::{DonutChart, build_donut_chart};
pub use engine::ChartEngine;
pub use json_contract::{CHART_OUTPUT_JSON_SCHEMA_V1, ChartOutputJsonContractV1};
pub use line_chart::{LineChart, PointMarker, build_line_chart};
pub use value_axis::GridLine;
