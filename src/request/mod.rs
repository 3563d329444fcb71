//! Parameter accumulation and request serialization.
//!
//! Composition stages write into a [`ParameterRegistry`]; the registry renders
//! one `key=value` fragment per populated kind and [`serializer`] joins them.

mod parameter;
mod registry;
pub mod serializer;

pub use parameter::{DataParameter, ListParameter, Parameter, ParameterKind, SingleParameter};
pub use registry::ParameterRegistry;
pub use serializer::{build, normalize, parameter_pairs};
