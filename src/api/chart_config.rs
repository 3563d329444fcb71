use serde::{Deserialize, Serialize};

use crate::core::{DataEncoding, Size};
use crate::error::{ChartError, ChartResult};

use super::validation::validate_chart_config;

/// Public endpoint of the image chart service.
pub const DEFAULT_ENDPOINT: &str = "https://chart.googleapis.com/chart";

/// Per-chart rendering settings.
///
/// Missing fields fall back to their defaults when deserialized, so a config
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub endpoint: String,
    pub encoding: DataEncoding,
    pub size: Size,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            encoding: DataEncoding::default(),
            size: Size::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: DataEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        validate_chart_config(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("chart config: {e}")))
    }
}
