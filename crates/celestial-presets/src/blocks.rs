//! Optional sub-blocks of a preset and the type-specific override blocks

use celestial_params::ShapeType;
use serde::Serialize;

use crate::range::Range;

/// Bloom pass ranges
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BloomRanges {
    pub threshold: Range,
    pub strength: Range,
    pub radius: Range,
}

/// Specular highlight ranges
///
/// Ambient and diffuse are not part of this block. Only a [`FixedCurve`]
/// sets them; every other body gets the generator baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightingRanges {
    pub specular: Range,
    pub shininess: Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BumpRanges {
    pub strength: Range,
    pub offset: Range,
}

/// Liquid layer ranges
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidRanges {
    pub wave_strength: Range,
    pub specular_intensity: Range,
    pub shininess: Range,
}

/// A full set of terrain noise ranges, every field given
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainRanges {
    pub amplitude: Range,
    pub sharpness: Range,
    pub period: Range,
    pub octaves: Range,
    pub offset: Range,
    pub persistence: Range,
    pub lacunarity: Range,
}

/// Override block pinning the whole look of a body
///
/// Used for stellar bodies whose appearance is a fixed response curve rather
/// than sampled surface detail. Replaces terrain, lighting, bump, liquid,
/// bloom and atmosphere opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedCurve {
    pub terrain: TerrainRanges,
    pub ambient: Range,
    pub diffuse: Range,
    pub lighting: LightingRanges,
    pub bump: BumpRanges,
    pub liquid: LiquidRanges,
    pub bloom: BloomRanges,
    pub atmosphere_opacity: Range,
}

/// Terrain override for one shape type of a layered-rock body
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RockStratum {
    pub shape: ShapeType,
    pub amplitude: Range,
    pub sharpness: Range,
    pub period: Option<Range>,
    pub octaves: Option<Range>,
    pub offset: Range,
    pub persistence: Range,
    pub liquid_shininess: Option<f64>,
}

/// Shape-dependent terrain override
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayeredRock {
    /// Applied for every shape
    pub lacunarity: f64,
    pub strata: &'static [RockStratum],
}

impl LayeredRock {
    pub fn stratum(&self, shape: ShapeType) -> Option<&RockStratum> {
        self.strata.iter().find(|s| s.shape == shape)
    }
}

/// Second round of hard overrides applied after generic sampling
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "block")]
pub enum TypeOverride {
    None,
    LayeredRock(&'static LayeredRock),
    FixedCurve(&'static FixedCurve),
}

impl TypeOverride {
    pub fn fixed_curve(&self) -> Option<&'static FixedCurve> {
        match self {
            Self::FixedCurve(curve) => Some(*curve),
            _ => None,
        }
    }

    pub fn layered_rock(&self) -> Option<&'static LayeredRock> {
        match self {
            Self::LayeredRock(rock) => Some(*rock),
            _ => None,
        }
    }
}
