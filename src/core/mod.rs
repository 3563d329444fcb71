pub mod axis;
pub mod color;
pub mod encoding;
pub mod fill;
pub mod plot;
pub mod primitives;
pub mod series;
pub mod types;

pub use axis::{AxisDefinition, AxisRange, AxisSide, AxisStyle, AxisTextAlignment};
pub use color::Color;
pub use encoding::DataEncoding;
pub use fill::{Fill, FillStop, FillTarget};
pub use plot::{
    LineStyle, Marker, MarkerPayload, MarkerPlacement, Plot, PlotMarker, Priority, Shape,
};
pub use series::{MAX_VALUE, MIN_VALUE, Series, in_domain};
pub use types::{
    GridLines, LegendPosition, Margins, RangeMarker, RangeOrientation, Size, Slice, Title,
};
