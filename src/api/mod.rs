//! Chart facade and the composition pipeline behind it.

mod axis_assembler;
mod chart;
mod chart_config;
mod chart_kind;
pub mod composition;
mod json_contract;
pub mod series_alignment;
mod validation;

pub use axis_assembler::assemble_axes;
pub use chart::{BarWidth, Chart, MAX_GET_URL_LEN};
pub use chart_config::{ChartConfig, DEFAULT_ENDPOINT};
pub use chart_kind::{BarGrouping, BarOrientation, ChartKind, LineChartStyle, PieStyle};
pub use composition::{CompositionContext, CompositionStage, compose, stages_for};
pub use json_contract::{PARAMETER_MAP_JSON_SCHEMA_V1, ParameterMapJsonContractV1};
pub use series_alignment::{AlignedPlotAttributes, AlignedSliceAttributes, PriorityMarker};
