//! Procedural parameter synthesis for celestial bodies
//!
//! Given an object type ("Star", "Rocky Planet", ...) the forge samples a
//! complete, mutually consistent [`ParameterSet`](celestial_params::ParameterSet)
//! from the type's preset: terrain noise, shading, band colors and thresholds,
//! rotation and the atmosphere shell.
//!
//! # Example
//! ```
//! use celestial_forge::Scene;
//!
//! let mut scene = Scene::headless();
//! scene.randomize_with_seed("Rocky Planet", 7);
//!
//! let params = scene.snapshot();
//! assert!(params.scene.body_visible);
//! assert!(params.planet.bands_ordered());
//! ```

pub mod config;
pub mod propagation;
pub mod sampling;
pub mod scene;
pub mod synthesis;

#[cfg(test)]
mod scene_test;
#[cfg(test)]
mod synthesis_test;

// Re-export key types
pub use config::{ConfigError, ForgeConfig};
pub use propagation::{RotationLock, ShellRadius, sync_atmosphere_radius};
pub use scene::{EditSurface, Headless, RenderConsumer, Scene, object_types};
pub use synthesis::synthesize;
