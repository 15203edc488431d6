//! Typed parameter values and the discrete choice types they carry

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::color::Rgb;

/// Terrain shape family selected by the surface shader
///
/// The shader switches its noise composition on this value; the numeric index
/// (1-3) is what ends up in the uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub enum ShapeType {
    Type1,
    Type2,
    Type3,
}

impl ShapeType {
    pub const ALL: [ShapeType; 3] = [Self::Type1, Self::Type2, Self::Type3];

    /// Shader-facing index (1-based)
    pub fn index(&self) -> u8 {
        match self {
            Self::Type1 => 1,
            Self::Type2 => 2,
            Self::Type3 => 3,
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type {}", self.index())
    }
}

/// Rotation axis for the body or its atmosphere shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Self::X, Self::Y, Self::Z];

    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind tag of a parameter, used for type checking by-name writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamKind {
    Float,
    Int,
    Color,
    Vector,
    Axis,
    Shape,
    Flag,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Float => "float",
            Self::Int => "int",
            Self::Color => "color",
            Self::Vector => "vector",
            Self::Axis => "axis",
            Self::Shape => "shape",
            Self::Flag => "flag",
        };
        f.write_str(name)
    }
}

/// A single parameter value as seen through the by-name interface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ParamValue {
    Float(f64),
    Int(u32),
    Color(Rgb),
    Vector(Vector3<f64>),
    Axis(Axis),
    Shape(ShapeType),
    Flag(bool),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Float(_) => ParamKind::Float,
            Self::Int(_) => ParamKind::Int,
            Self::Color(_) => ParamKind::Color,
            Self::Vector(_) => ParamKind::Vector,
            Self::Axis(_) => ParamKind::Axis,
            Self::Shape(_) => ParamKind::Shape,
            Self::Flag(_) => ParamKind::Flag,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Non-finite floats, colors and vectors are never accepted by the store
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Float(v) => v.is_finite(),
            Self::Color(c) => c.is_finite(),
            Self::Vector(v) => v.iter().all(|c| c.is_finite()),
            Self::Int(_) | Self::Axis(_) | Self::Shape(_) | Self::Flag(_) => true,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Int(v)
    }
}

impl From<Rgb> for ParamValue {
    fn from(v: Rgb) -> Self {
        Self::Color(v)
    }
}

impl From<Vector3<f64>> for ParamValue {
    fn from(v: Vector3<f64>) -> Self {
        Self::Vector(v)
    }
}

impl From<Axis> for ParamValue {
    fn from(v: Axis) -> Self {
        Self::Axis(v)
    }
}

impl From<ShapeType> for ParamValue {
    fn from(v: ShapeType) -> Self {
        Self::Shape(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}
