use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::DataPoint;
use crate::error::ChartResult;

use super::{ChartKind, ChartOutput};

/// One independent chart to lay out, e.g. a dashboard tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub series: Vec<DataPoint>,
}

impl ChartRequest {
    #[must_use]
    pub fn new(kind: impl Into<ChartKind>, series: Vec<DataPoint>) -> Self {
        Self {
            kind: kind.into(),
            series,
        }
    }

    pub fn build(&self) -> ChartResult<ChartOutput> {
        self.kind.build(&self.series)
    }
}

/// Lays out every request; results keep the request order.
///
/// Runs on the rayon pool with the `parallel-layout` feature. Charts share no
/// state, so one failing request does not affect the others.
#[must_use]
pub fn build_batch(requests: &[ChartRequest]) -> Vec<ChartResult<ChartOutput>> {
    debug!(charts = requests.len(), "build chart batch");

    #[cfg(feature = "parallel-layout")]
    {
        use rayon::prelude::*;

        return requests.par_iter().map(ChartRequest::build).collect();
    }

    #[cfg(not(feature = "parallel-layout"))]
    {
        requests.iter().map(ChartRequest::build).collect()
    }
}
