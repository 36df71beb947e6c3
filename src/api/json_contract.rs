use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{ChartKind, ChartOutput};

pub const CHART_OUTPUT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOutputJsonContractV1 {
    pub schema_version: u32,
    pub output: ChartOutput,
}

impl ChartOutput {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartOutputJsonContractV1 {
            schema_version: CHART_OUTPUT_JSON_SCHEMA_V1,
            output: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart output contract v1: {e}"))
        })
    }

    /// Accepts either a bare output or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(output) = serde_json::from_str::<ChartOutput>(input) {
            return Ok(output);
        }
        let payload: ChartOutputJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse chart output json payload: {e}"))
        })?;
        if payload.schema_version != CHART_OUTPUT_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported chart output schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.output)
    }
}

impl ChartKind {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart config: {e}"))
        })
    }

    /// Parses a persisted chart config; omitted fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let kind: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse chart config: {e}"))
        })?;
        kind.validate()?;
        Ok(kind)
    }
}
