//! By-name access to a [`ParameterSet`]
//!
//! Every parameter the edit surface can see is listed once in [`PARAMS`] with
//! its kind, its edit range and accessor functions. Names are dotted paths
//! (`planet.radius`, `atmosphere.opacity`, ...). A couple of names are aliases
//! for the same storage, see [`ALIASES`].

use crate::error::ParamError;
use crate::parameter_set::ParameterSet;
use crate::values::{ParamKind, ParamValue};

/// Descriptor of one named parameter
#[derive(Debug)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    /// Closed edit range for floats and ints; `None` means unbounded
    pub range: Option<(f64, f64)>,
    /// Derived and frame-driven values are read-only through the edit surface
    pub writable: bool,
    get: fn(&ParameterSet) -> ParamValue,
    set: fn(&mut ParameterSet, ParamValue),
}

impl ParamSpec {
    pub fn get(&self, params: &ParameterSet) -> ParamValue {
        (self.get)(params)
    }

    /// Type-check, reject non-finite input and clamp to the edit range
    pub fn coerce(&self, value: ParamValue) -> Result<ParamValue, ParamError> {
        if value.kind() != self.kind {
            return Err(ParamError::KindMismatch {
                name: self.name.to_string(),
                expected: self.kind,
                found: value.kind(),
            });
        }
        if !value.is_finite() {
            return Err(ParamError::NotFinite(self.name.to_string()));
        }

        let coerced = match (value, self.range) {
            (ParamValue::Float(v), Some((lo, hi))) => ParamValue::Float(v.clamp(lo, hi)),
            (ParamValue::Int(v), Some((lo, hi))) => {
                ParamValue::Int(v.clamp(lo as u32, hi as u32))
            }
            (ParamValue::Color(c), _) => ParamValue::Color(c.clamped()),
            (other, _) => other,
        };
        Ok(coerced)
    }

    /// Write an already coerced value
    pub(crate) fn write(&self, params: &mut ParameterSet, value: ParamValue) {
        (self.set)(params, value)
    }
}

macro_rules! param {
    ($kind:ident, $name:literal, |$p:ident| $place:expr, $range:expr) => {
        param!($kind, $name, |$p| $place, $range, true)
    };
    ($kind:ident, $name:literal, |$p:ident| $place:expr, $range:expr, $writable:expr) => {
        ParamSpec {
            name: $name,
            kind: ParamKind::$kind,
            range: $range,
            writable: $writable,
            get: |$p| ParamValue::$kind($place),
            set: |$p, value| {
                if let ParamValue::$kind(v) = value {
                    $place = v;
                }
            },
        }
    };
}

const fn span(lo: f64, hi: f64) -> Option<(f64, f64)> {
    Some((lo, hi))
}

const UNIT: Option<(f64, f64)> = span(0.0, 1.0);
const BANDS: Option<(f64, f64)> = span(0.0, 3.0);
const SPIN: Option<(f64, f64)> = span(0.0, 500.0);
const READ_ONLY: bool = false;

/// Every named parameter, grouped by owner
pub static PARAMS: &[ParamSpec] = &[
    // Planet
    param!(Shape, "planet.type", |p| p.planet.shape, None),
    param!(Float, "planet.radius", |p| p.planet.radius, span(1.0, 50.0)),
    param!(Float, "planet.amplitude", |p| p.planet.amplitude, span(0.0, 2.0)),
    param!(Float, "planet.sharpness", |p| p.planet.sharpness, span(0.0, 10.0)),
    param!(Float, "planet.offset", |p| p.planet.offset, span(-1.0, 2.0)),
    param!(Float, "planet.period", |p| p.planet.period, span(0.0, 2.0)),
    param!(Float, "planet.persistence", |p| p.planet.persistence, UNIT),
    param!(Float, "planet.lacunarity", |p| p.planet.lacunarity, span(1.0, 3.0)),
    param!(Int, "planet.octaves", |p| p.planet.octaves, span(1.0, 16.0)),
    param!(Float, "planet.undulation", |p| p.planet.undulation, UNIT),
    param!(Float, "planet.ambientIntensity", |p| p.planet.ambient_intensity, span(0.0, 2.0)),
    param!(Float, "planet.diffuseIntensity", |p| p.planet.diffuse_intensity, span(0.0, 2.0)),
    param!(Float, "planet.specularIntensity", |p| p.planet.specular_intensity, span(0.0, 2.0)),
    param!(Float, "planet.shininess", |p| p.planet.shininess, span(0.0, 50.0)),
    param!(Float, "planet.bumpStrength", |p| p.planet.bump_strength, span(0.0, 2.0)),
    param!(Float, "planet.bumpOffset", |p| p.planet.bump_offset, span(0.0, 0.01)),
    param!(Float, "planet.liquidWaveStrength", |p| p.planet.liquid_wave_strength, UNIT),
    param!(
        Float,
        "planet.liquidSpecularIntensity",
        |p| p.planet.liquid_specular_intensity,
        span(0.0, 5.0)
    ),
    param!(Float, "planet.liquidShininess", |p| p.planet.liquid_shininess, span(0.0, 100.0)),
    param!(Float, "planet.rotationSpeed", |p| p.planet.rotation_speed, SPIN),
    param!(Axis, "planet.rotationDirection", |p| p.planet.rotation_direction, None),
    param!(Color, "planet.color1", |p| p.planet.colors[0], None),
    param!(Color, "planet.color2", |p| p.planet.colors[1], None),
    param!(Color, "planet.color3", |p| p.planet.colors[2], None),
    param!(Color, "planet.color4", |p| p.planet.colors[3], None),
    param!(Color, "planet.color5", |p| p.planet.colors[4], None),
    param!(Float, "planet.transition2", |p| p.planet.transitions[0], BANDS),
    param!(Float, "planet.transition3", |p| p.planet.transitions[1], BANDS),
    param!(Float, "planet.transition4", |p| p.planet.transitions[2], BANDS),
    param!(Float, "planet.transition5", |p| p.planet.transitions[3], BANDS),
    param!(Float, "planet.blend12", |p| p.planet.blends[0], UNIT),
    param!(Float, "planet.blend23", |p| p.planet.blends[1], UNIT),
    param!(Float, "planet.blend34", |p| p.planet.blends[2], UNIT),
    param!(Float, "planet.blend45", |p| p.planet.blends[3], UNIT),
    // Atmosphere
    param!(Int, "atmosphere.particles", |p| p.atmosphere.particles, None, READ_ONLY),
    param!(
        Float,
        "atmosphere.minParticleSize",
        |p| p.atmosphere.min_particle_size,
        None,
        READ_ONLY
    ),
    param!(
        Float,
        "atmosphere.maxParticleSize",
        |p| p.atmosphere.max_particle_size,
        None,
        READ_ONLY
    ),
    param!(Float, "atmosphere.radius", |p| p.atmosphere.radius, None, READ_ONLY),
    param!(Float, "atmosphere.thickness", |p| p.atmosphere.thickness, None, READ_ONLY),
    param!(Float, "atmosphere.density", |p| p.atmosphere.density, None, READ_ONLY),
    param!(Float, "atmosphere.opacity", |p| p.atmosphere.opacity, UNIT),
    param!(Float, "atmosphere.scale", |p| p.atmosphere.scale, None, READ_ONLY),
    param!(Color, "atmosphere.color", |p| p.atmosphere.color, None),
    param!(Float, "atmosphere.speed", |p| p.atmosphere.speed, None, READ_ONLY),
    param!(Float, "atmosphere.rotationSpeed", |p| p.atmosphere.rotation_speed, SPIN),
    param!(
        Axis,
        "atmosphere.rotationDirection",
        |p| p.atmosphere.rotation_direction,
        None
    ),
    param!(Float, "atmosphere.time", |p| p.atmosphere.time, None, READ_ONLY),
    param!(Float, "atmosphere.rotation", |p| p.atmosphere.rotation, None, READ_ONLY),
    // Bloom pass
    param!(Float, "bloom.threshold", |p| p.bloom.threshold, UNIT),
    param!(Float, "bloom.strength", |p| p.bloom.strength, span(0.0, 2.0)),
    param!(Float, "bloom.radius", |p| p.bloom.radius, span(0.0, 2.0)),
    // Light
    param!(Vector, "light.direction", |p| p.light.direction, None),
    param!(Color, "light.color", |p| p.light.color, None),
    // Scene
    param!(Flag, "scene.bodyVisible", |p| p.scene.body_visible, None, READ_ONLY),
    param!(
        Flag,
        "scene.atmosphereVisible",
        |p| p.scene.atmosphere_visible,
        None,
        READ_ONLY
    ),
    param!(Flag, "scene.rotationLocked", |p| p.scene.rotation_locked, None, READ_ONLY),
];

/// Names that resolve to another parameter's storage
pub static ALIASES: &[(&str, &str)] = &[
    ("planet.lightDirection", "light.direction"),
    ("atmosphere.lightDirection", "light.direction"),
    ("planet.lightColor", "light.color"),
];

/// Resolve an alias to its canonical name; other names pass through
pub fn canonical_name(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, target)| *target)
        .unwrap_or(name)
}

/// Look a parameter up by name or alias
pub fn spec(name: &str) -> Option<&'static ParamSpec> {
    let name = canonical_name(name);
    PARAMS.iter().find(|s| s.name == name)
}

/// Canonical names of every parameter, in table order
pub fn names() -> impl Iterator<Item = &'static str> {
    PARAMS.iter().map(|s| s.name)
}

/// Read a parameter by name
pub fn get(params: &ParameterSet, name: &str) -> Result<ParamValue, ParamError> {
    spec(name)
        .map(|s| s.get(params))
        .ok_or_else(|| ParamError::UnknownParameter(name.to_string()))
}

/// Convenience read for float parameters
pub fn get_float(params: &ParameterSet, name: &str) -> Result<f64, ParamError> {
    let spec = spec(name).ok_or_else(|| ParamError::UnknownParameter(name.to_string()))?;
    spec.get(params)
        .as_float()
        .ok_or_else(|| ParamError::KindMismatch {
            name: spec.name.to_string(),
            expected: ParamKind::Float,
            found: spec.kind,
        })
}
