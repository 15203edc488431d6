//! The complete parameter assignment consumed by the body and atmosphere shaders
//!
//! A [`ParameterSet`] is a plain value. Synthesis builds a fresh one and the store
//! swaps it in whole, so a renderer reading the store never sees a half-written
//! assignment.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::values::{Axis, ShapeType};

/// Default gap between the planet surface and the atmosphere shell
pub const DEFAULT_ATMOSPHERE_MARGIN: f64 = 1.0;

/// Terrain, shading and band parameters of the body itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetParams {
    pub shape: ShapeType,
    pub radius: f64,

    // Terrain noise
    pub amplitude: f64,
    pub sharpness: f64,
    pub offset: f64,
    pub period: f64,
    pub persistence: f64,
    pub lacunarity: f64,
    pub octaves: u32,
    pub undulation: f64,

    // Blinn-Phong lighting
    pub ambient_intensity: f64,
    pub diffuse_intensity: f64,
    pub specular_intensity: f64,
    pub shininess: f64,

    pub bump_strength: f64,
    pub bump_offset: f64,

    // Liquid layer
    pub liquid_wave_strength: f64,
    pub liquid_specular_intensity: f64,
    pub liquid_shininess: f64,

    pub rotation_speed: f64,
    pub rotation_direction: Axis,

    /// Band colors, lowest band first
    pub colors: [Rgb; 5],
    /// Band thresholds transition2..transition5
    pub transitions: [f64; 4],
    /// Blend widths blend12, blend23, blend34, blend45
    pub blends: [f64; 4],
}

impl Default for PlanetParams {
    fn default() -> Self {
        Self {
            shape: ShapeType::Type2,
            radius: 20.0,
            amplitude: 1.19,
            sharpness: 2.6,
            offset: -0.016,
            period: 0.6,
            persistence: 0.484,
            lacunarity: 1.8,
            octaves: 10,
            undulation: 0.0,
            ambient_intensity: 0.02,
            diffuse_intensity: 1.0,
            specular_intensity: 2.0,
            shininess: 10.0,
            bump_strength: 1.0,
            bump_offset: 0.001,
            liquid_wave_strength: 0.0,
            liquid_specular_intensity: 0.0,
            liquid_shininess: 0.0,
            rotation_speed: 0.0,
            rotation_direction: Axis::Y,
            colors: [
                Rgb::new(0.014, 0.117, 0.279),
                Rgb::new(0.080, 0.527, 0.351),
                Rgb::new(0.620, 0.516, 0.372),
                Rgb::new(0.149, 0.254, 0.084),
                Rgb::new(0.150, 0.150, 0.150),
            ],
            transitions: [0.071, 0.215, 0.372, 1.2],
            blends: [0.152, 0.152, 0.104, 0.168],
        }
    }
}

impl PlanetParams {
    /// True when transition2 <= transition3 <= transition4 <= transition5
    pub fn bands_ordered(&self) -> bool {
        self.transitions.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Particle shell rendered around the body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmosphereParams {
    pub particles: u32,
    pub min_particle_size: f64,
    pub max_particle_size: f64,
    /// Derived: planet radius plus the shell margin
    pub radius: f64,
    pub thickness: f64,
    pub density: f64,
    pub opacity: f64,
    pub scale: f64,
    pub color: Rgb,
    pub speed: f64,
    pub rotation_speed: f64,
    pub rotation_direction: Axis,
    /// Shader time uniform, advanced once per frame
    pub time: f64,
    /// Accumulated spin of the shell in radians
    pub rotation: f64,
}

impl Default for AtmosphereParams {
    fn default() -> Self {
        Self {
            particles: 4000,
            min_particle_size: 50.0,
            max_particle_size: 100.0,
            radius: PlanetParams::default().radius + DEFAULT_ATMOSPHERE_MARGIN,
            thickness: 1.5,
            density: 0.0,
            opacity: 0.35,
            scale: 8.0,
            color: Rgb::WHITE,
            speed: 0.03,
            rotation_speed: 0.0,
            rotation_direction: Axis::Y,
            time: 0.0,
            rotation: 0.0,
        }
    }
}

/// Unreal-style bloom pass settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloomParams {
    pub threshold: f64,
    pub strength: f64,
    pub radius: f64,
}

impl Default for BloomParams {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            strength: 0.2,
            radius: 0.5,
        }
    }
}

/// The scene's single light
///
/// Planet and atmosphere both read `direction` from here. Neither owns a copy,
/// so an edit reaches both renderers in the same write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightParams {
    pub direction: Vector3<f64>,
    pub color: Rgb,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            direction: Vector3::new(1.0, 1.0, 1.0),
            color: Rgb::WHITE,
        }
    }
}

/// Visibility flags pushed to the render consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneFlags {
    /// Hidden until the first successful synthesis
    pub body_visible: bool,
    pub atmosphere_visible: bool,
    /// Planet and atmosphere rotation speeds are kept equal
    pub rotation_locked: bool,
}

impl Default for SceneFlags {
    fn default() -> Self {
        Self {
            body_visible: false,
            atmosphere_visible: true,
            rotation_locked: false,
        }
    }
}

/// Everything the render consumer and edit surface read
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    pub planet: PlanetParams,
    pub atmosphere: AtmosphereParams,
    pub bloom: BloomParams,
    pub light: LightParams,
    pub scene: SceneFlags,
}

impl ParameterSet {
    /// Light direction as seen by the planet shader
    pub fn planet_light_direction(&self) -> &Vector3<f64> {
        &self.light.direction
    }

    /// Light direction as seen by the atmosphere shader
    ///
    /// Same storage as [`ParameterSet::planet_light_direction`].
    pub fn atmosphere_light_direction(&self) -> &Vector3<f64> {
        &self.light.direction
    }
}
