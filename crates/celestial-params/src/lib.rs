//! Parameter store for a procedurally shaded celestial body
//!
//! This crate holds the data side of the body: the typed [`ParameterSet`] the
//! shaders read, the by-name [`registry`] the edit surface binds to, and the
//! [`ParameterStore`] that serializes writes and broadcasts changes.

pub mod color;
pub mod error;
pub mod parameter_set;
pub mod registry;
pub mod store;
pub mod values;

#[cfg(test)]
mod registry_test;

// Re-export key types at crate root
pub use color::Rgb;
pub use error::ParamError;
pub use parameter_set::{
    AtmosphereParams, BloomParams, DEFAULT_ATMOSPHERE_MARGIN, LightParams, ParameterSet,
    PlanetParams, SceneFlags,
};
pub use store::{ChangeOrigin, EditOutcome, ParamChange, ParameterStore, Propagation, SubscriptionId};
pub use values::{Axis, ParamKind, ParamValue, ShapeType};
