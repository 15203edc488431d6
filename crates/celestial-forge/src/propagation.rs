//! Derived-value rules
//!
//! Synthesis calls [`sync_atmosphere_radius`] directly. Manual edits reach the
//! same logic through the [`Propagation`] rules the scene registers on its
//! store.

use celestial_params::{ParameterSet, Propagation};

pub const PLANET_RADIUS: &str = "planet.radius";
pub const ATMOSPHERE_RADIUS: &str = "atmosphere.radius";
pub const PLANET_ROTATION_SPEED: &str = "planet.rotationSpeed";
pub const ATMOSPHERE_ROTATION_SPEED: &str = "atmosphere.rotationSpeed";

/// Place the atmosphere shell `margin` above the surface
pub fn sync_atmosphere_radius(params: &mut ParameterSet, margin: f64) {
    params.atmosphere.radius = params.planet.radius + margin;
}

/// Keeps `atmosphere.radius` at `planet.radius + margin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellRadius {
    pub margin: f64,
}

impl ShellRadius {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }
}

impl Propagation for ShellRadius {
    fn propagate(&self, params: &mut ParameterSet, source: &str) -> Vec<&'static str> {
        if source != PLANET_RADIUS {
            return Vec::new();
        }
        sync_atmosphere_radius(params, self.margin);
        vec![ATMOSPHERE_RADIUS]
    }
}

/// Mirrors rotation speed between body and shell while they are locked
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationLock;

impl Propagation for RotationLock {
    fn propagate(&self, params: &mut ParameterSet, source: &str) -> Vec<&'static str> {
        if !params.scene.rotation_locked {
            return Vec::new();
        }
        match source {
            PLANET_ROTATION_SPEED => {
                params.atmosphere.rotation_speed = params.planet.rotation_speed;
                vec![ATMOSPHERE_ROTATION_SPEED]
            }
            ATMOSPHERE_ROTATION_SPEED => {
                params.planet.rotation_speed = params.atmosphere.rotation_speed;
                vec![PLANET_ROTATION_SPEED]
            }
            _ => Vec::new(),
        }
    }
}
