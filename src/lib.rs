//! chart-request: typed chart model rendered into image-chart request URLs.
//!
//! Charts are described with [`api::Chart`] and the model types in [`core`].
//! Serialization runs a fixed stage pipeline that fills a per-call parameter
//! registry, encodes series data compactly and joins the fragments into a
//! reproducible query string.

pub mod api;
pub mod core;
pub mod error;
pub mod request;
pub mod telemetry;

pub use api::{Chart, ChartConfig, ChartKind};
pub use error::{ChartError, ChartResult};
