use celestial_params::{Rgb, ShapeType};
use serde::Serialize;
use thiserror::Error;

use crate::blocks::{
    BloomRanges, BumpRanges, LightingRanges, LiquidRanges, TerrainRanges, TypeOverride,
};
use crate::object_type::ObjectType;
use crate::range::Range;

/// Minimum number of anchor colors a palette must offer
pub const MIN_PALETTE_ANCHORS: usize = 5;

/// Declarative range and constraint bundle for one object type
///
/// Optional sub-blocks are `None` when the type does not vary that aspect;
/// synthesis then keeps whatever value the parameter already had.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTypePreset {
    pub object_type: ObjectType,
    pub radius: Range,
    pub shapes: &'static [ShapeType],

    pub amplitude: Range,
    pub sharpness: Range,
    pub period: Range,
    /// Sampled then floored; a fixed range is an exact octave count
    pub octaves: Range,
    /// Falls back to the generator default when `None`
    pub offset: Option<Range>,
    pub persistence: Option<Range>,
    pub lacunarity: Option<Range>,

    pub palette: &'static [Rgb],

    pub bloom: Option<BloomRanges>,
    pub lighting: Option<LightingRanges>,
    pub bump: Option<BumpRanges>,
    pub liquid: Option<LiquidRanges>,
    /// When present, planet and atmosphere spin in lockstep
    pub rotation_speed: Option<Range>,

    /// Airless bodies get no atmosphere shell
    pub airless: bool,
    pub overrides: TypeOverride,
}

/// A preset that breaks the table invariants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresetError {
    #[error("{object_type}: range {field} is not a closed interval [{lo}, {hi}]")]
    InvalidRange {
        object_type: ObjectType,
        field: &'static str,
        lo: f64,
        hi: f64,
    },

    #[error("{object_type}: no shape types to choose from")]
    NoShapes { object_type: ObjectType },

    #[error("{object_type}: palette has {count} anchors, need at least {min}", min = MIN_PALETTE_ANCHORS)]
    ShortPalette { object_type: ObjectType, count: usize },
}

impl ObjectTypePreset {
    /// True if this type's look is pinned by a fixed-curve block
    pub fn has_fixed_curve(&self) -> bool {
        self.overrides.fixed_curve().is_some()
    }

    /// Check every range is a closed interval and every choice set non-empty
    pub fn validate(&self) -> Result<(), PresetError> {
        if self.shapes.is_empty() {
            return Err(PresetError::NoShapes {
                object_type: self.object_type,
            });
        }
        if self.palette.len() < MIN_PALETTE_ANCHORS {
            return Err(PresetError::ShortPalette {
                object_type: self.object_type,
                count: self.palette.len(),
            });
        }

        self.ranges().try_for_each(|(field, range)| {
            if range.is_valid() {
                Ok(())
            } else {
                Err(PresetError::InvalidRange {
                    object_type: self.object_type,
                    field,
                    lo: range.lo,
                    hi: range.hi,
                })
            }
        })
    }

    /// Every declared range, labelled, including those of sub-blocks and overrides
    pub fn ranges(&self) -> impl Iterator<Item = (&'static str, Range)> {
        let mut out: Vec<(&'static str, Range)> = vec![
            ("radius", self.radius),
            ("amplitude", self.amplitude),
            ("sharpness", self.sharpness),
            ("period", self.period),
            ("octaves", self.octaves),
        ];
        out.extend(self.offset.map(|r| ("offset", r)));
        out.extend(self.persistence.map(|r| ("persistence", r)));
        out.extend(self.lacunarity.map(|r| ("lacunarity", r)));
        out.extend(self.rotation_speed.map(|r| ("rotationSpeed", r)));
        if let Some(bloom) = &self.bloom {
            push_bloom(&mut out, bloom);
        }
        if let Some(lighting) = &self.lighting {
            push_lighting(&mut out, lighting);
        }
        if let Some(bump) = &self.bump {
            push_bump(&mut out, bump);
        }
        if let Some(liquid) = &self.liquid {
            push_liquid(&mut out, liquid);
        }

        match self.overrides {
            TypeOverride::None => {}
            TypeOverride::FixedCurve(curve) => {
                push_terrain(&mut out, &curve.terrain);
                out.push(("curve.ambient", curve.ambient));
                out.push(("curve.diffuse", curve.diffuse));
                push_lighting(&mut out, &curve.lighting);
                push_bump(&mut out, &curve.bump);
                push_liquid(&mut out, &curve.liquid);
                push_bloom(&mut out, &curve.bloom);
                out.push(("curve.atmosphereOpacity", curve.atmosphere_opacity));
            }
            TypeOverride::LayeredRock(rock) => {
                for stratum in rock.strata {
                    out.push(("rock.amplitude", stratum.amplitude));
                    out.push(("rock.sharpness", stratum.sharpness));
                    out.extend(stratum.period.map(|r| ("rock.period", r)));
                    out.extend(stratum.octaves.map(|r| ("rock.octaves", r)));
                    out.push(("rock.offset", stratum.offset));
                    out.push(("rock.persistence", stratum.persistence));
                }
            }
        }

        out.into_iter()
    }
}

fn push_terrain(out: &mut Vec<(&'static str, Range)>, terrain: &TerrainRanges) {
    out.extend([
        ("curve.amplitude", terrain.amplitude),
        ("curve.sharpness", terrain.sharpness),
        ("curve.period", terrain.period),
        ("curve.octaves", terrain.octaves),
        ("curve.offset", terrain.offset),
        ("curve.persistence", terrain.persistence),
        ("curve.lacunarity", terrain.lacunarity),
    ]);
}

fn push_lighting(out: &mut Vec<(&'static str, Range)>, lighting: &LightingRanges) {
    out.push(("lighting.specular", lighting.specular));
    out.push(("lighting.shininess", lighting.shininess));
}

fn push_bump(out: &mut Vec<(&'static str, Range)>, bump: &BumpRanges) {
    out.push(("bump.strength", bump.strength));
    out.push(("bump.offset", bump.offset));
}

fn push_liquid(out: &mut Vec<(&'static str, Range)>, liquid: &LiquidRanges) {
    out.push(("liquid.waveStrength", liquid.wave_strength));
    out.push(("liquid.specularIntensity", liquid.specular_intensity));
    out.push(("liquid.shininess", liquid.shininess));
}

fn push_bloom(out: &mut Vec<(&'static str, Range)>, bloom: &BloomRanges) {
    out.push(("bloom.threshold", bloom.threshold));
    out.push(("bloom.strength", bloom.strength));
    out.push(("bloom.radius", bloom.radius));
}
