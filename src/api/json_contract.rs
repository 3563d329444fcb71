use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::Chart;

pub const PARAMETER_MAP_JSON_SCHEMA_V1: u32 = 1;

/// Versioned JSON form of a chart request, for callers that POST the
/// parameters or store them for later replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMapJsonContractV1 {
    pub schema_version: u32,
    pub endpoint: String,
    pub parameters: IndexMap<String, String>,
}

impl ParameterMapJsonContractV1 {
    #[must_use]
    pub fn from_chart(chart: &Chart) -> Self {
        Self {
            schema_version: PARAMETER_MAP_JSON_SCHEMA_V1,
            endpoint: chart.config().endpoint.clone(),
            parameters: chart.parameters(),
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("parameter map contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse parameter map json payload: {e}"))
        })?;
        if payload.schema_version != PARAMETER_MAP_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported parameter map schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }

    /// Rebuilds the GET url, keeping the stored parameter order.
    #[must_use]
    pub fn to_url(&self) -> String {
        let query = self
            .parameters
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.endpoint)
    }
}

impl Chart {
    pub fn parameters_json_contract_v1_pretty(&self) -> ChartResult<String> {
        ParameterMapJsonContractV1::from_chart(self).to_json_pretty()
    }
}
