//! The preset table: one entry per [`ObjectType`]
//!
//! Pure data. Fixed values are written as zero-width ranges so every scalar in
//! the table goes through the same sampling path.

use celestial_params::{Rgb, ShapeType};

use crate::blocks::{
    BloomRanges, BumpRanges, FixedCurve, LayeredRock, LightingRanges, LiquidRanges, RockStratum,
    TerrainRanges, TypeOverride,
};
use crate::object_type::ObjectType;
use crate::preset::ObjectTypePreset;
use crate::range::Range;

const fn span(lo: f64, hi: f64) -> Range {
    Range::new(lo, hi)
}

const fn fixed(value: f64) -> Range {
    Range::fixed(value)
}

const fn rgb(r: f64, g: f64, b: f64) -> Rgb {
    Rgb::new(r, g, b)
}

// =============================================================================
// Palettes
// =============================================================================

const STAR_PALETTE: [Rgb; 6] = [
    rgb(1.0, 0.9, 0.4),
    rgb(1.0, 0.5, 0.2),
    rgb(1.0, 0.2, 0.0),
    rgb(0.9, 0.1, 0.0),
    rgb(0.7, 0.0, 0.0),
    rgb(0.0, 0.2, 1.0),
];

const NEUTRON_STAR_PALETTE: [Rgb; 5] = [
    rgb(0.8, 0.9, 1.0),
    rgb(0.9, 1.0, 1.0),
    rgb(1.0, 1.0, 1.0),
    rgb(0.9, 0.9, 1.0),
    rgb(0.8, 0.8, 1.0),
];

const ASTEROID_PALETTE: [Rgb; 5] = [
    rgb(0.5, 0.45, 0.4),
    rgb(0.6, 0.55, 0.5),
    rgb(0.7, 0.65, 0.6),
    rgb(0.55, 0.5, 0.45),
    rgb(0.45, 0.4, 0.35),
];

const COMET_PALETTE: [Rgb; 5] = [
    rgb(0.7, 0.8, 1.0),
    rgb(0.8, 0.9, 1.0),
    rgb(0.9, 0.95, 1.0),
    rgb(1.0, 1.0, 1.0),
    rgb(0.9, 0.9, 0.9),
];

const MOON_PALETTE: [Rgb; 5] = [
    rgb(0.6, 0.6, 0.6),
    rgb(0.7, 0.7, 0.7),
    rgb(0.8, 0.8, 0.8),
    rgb(0.75, 0.75, 0.75),
    rgb(0.65, 0.65, 0.65),
];

const ROCKY_PALETTE: [Rgb; 5] = [
    rgb(0.2, 0.1, 0.1),
    rgb(0.3, 0.2, 0.2),
    rgb(0.5, 0.4, 0.3),
    rgb(0.1, 0.3, 0.2),
    rgb(0.2, 0.4, 0.3),
];

const LIQUID_PALETTE: [Rgb; 5] = [
    rgb(0.0, 0.1, 0.8),
    rgb(0.1, 0.8, 0.2),
    rgb(0.8, 0.2, 0.1),
    rgb(0.2, 0.8, 0.8),
    rgb(0.8, 0.2, 0.8),
];

const AQUAPLANET_PALETTE: [Rgb; 5] = [
    rgb(0.0, 0.1, 0.3),
    rgb(0.1, 0.5, 0.2),
    rgb(0.5, 0.2, 0.8),
    rgb(0.8, 0.1, 0.2),
    rgb(0.2, 0.9, 0.9),
];

const GAS_PLANET_PALETTE: [Rgb; 5] = [
    rgb(0.8, 0.7, 0.6),
    rgb(0.6, 0.5, 0.4),
    rgb(0.9, 0.8, 0.7),
    rgb(0.7, 0.6, 0.5),
    rgb(0.85, 0.75, 0.65),
];

// =============================================================================
// Type-specific override blocks
// =============================================================================

/// Star: a saturated emissive surface with a fixed bloom curve
static STAR_CURVE: FixedCurve = FixedCurve {
    terrain: TerrainRanges {
        amplitude: fixed(2.0),
        sharpness: fixed(10.0),
        period: fixed(0.0),
        octaves: fixed(16.0),
        offset: span(-1.0, 2.0),
        persistence: fixed(0.0),
        lacunarity: fixed(1.0),
    },
    ambient: span(0.346, 0.5),
    diffuse: span(0.0, 2.0),
    lighting: LightingRanges {
        specular: fixed(1.0),
        shininess: fixed(0.0),
    },
    bump: BumpRanges {
        strength: fixed(2.0),
        offset: fixed(0.0),
    },
    liquid: LiquidRanges {
        wave_strength: fixed(1.0),
        specular_intensity: fixed(5.0),
        shininess: fixed(0.0),
    },
    bloom: BloomRanges {
        threshold: fixed(0.0),
        strength: fixed(1.0),
        radius: fixed(0.0),
    },
    atmosphere_opacity: fixed(1.0),
};

/// Neutron star: a featureless, over-lit point-like body
static NEUTRON_STAR_CURVE: FixedCurve = FixedCurve {
    terrain: TerrainRanges {
        amplitude: fixed(0.0),
        sharpness: fixed(0.0),
        period: fixed(0.0),
        octaves: fixed(16.0),
        offset: fixed(2.0),
        persistence: fixed(1.0),
        lacunarity: fixed(3.0),
    },
    ambient: span(0.0, 2.0),
    diffuse: span(1.0, 2.0),
    lighting: LightingRanges {
        specular: fixed(2.0),
        shininess: fixed(0.0),
    },
    bump: BumpRanges {
        strength: fixed(0.371),
        offset: fixed(0.0),
    },
    liquid: LiquidRanges {
        wave_strength: fixed(1.0),
        specular_intensity: fixed(5.0),
        shininess: fixed(0.0),
    },
    bloom: BloomRanges {
        threshold: fixed(0.0),
        strength: span(0.5, 1.0),
        radius: fixed(0.0),
    },
    atmosphere_opacity: span(0.0, 1.0),
};

/// Rocky planet: ridged strata whose shape depends on the terrain type
static ROCKY_STRATA: LayeredRock = LayeredRock {
    lacunarity: 3.0,
    strata: &[
        RockStratum {
            shape: ShapeType::Type2,
            amplitude: span(0.918, 1.2),
            sharpness: span(2.12, 2.64),
            period: Some(span(0.684, 1.2)),
            octaves: Some(fixed(16.0)),
            offset: span(-0.222, 2.0),
            persistence: span(0.366, 0.459),
            liquid_shininess: Some(100.0),
        },
        RockStratum {
            shape: ShapeType::Type3,
            amplitude: span(1.2, 1.5),
            sharpness: span(3.0, 5.0),
            period: None,
            octaves: None,
            offset: span(0.333, 2.0),
            persistence: span(0.4, 0.44),
            liquid_shininess: None,
        },
    ],
};

// =============================================================================
// Presets
// =============================================================================

/// Every preset, in [`ObjectType::ALL`] order
pub static PRESETS: [ObjectTypePreset; 9] = [
    ObjectTypePreset {
        object_type: ObjectType::Star,
        radius: span(25.0, 40.0),
        shapes: &[ShapeType::Type3],
        amplitude: fixed(2.0),
        sharpness: fixed(10.0),
        period: fixed(0.0),
        octaves: fixed(16.0),
        offset: None,
        persistence: None,
        lacunarity: None,
        palette: &STAR_PALETTE,
        bloom: None,
        lighting: None,
        bump: None,
        liquid: None,
        rotation_speed: Some(span(0.15, 0.3)),
        airless: false,
        overrides: TypeOverride::FixedCurve(&STAR_CURVE),
    },
    ObjectTypePreset {
        object_type: ObjectType::NeutronStar,
        radius: span(5.0, 15.0),
        shapes: &[ShapeType::Type1],
        amplitude: span(0.1, 0.2),
        sharpness: span(1.0, 2.5),
        period: span(0.4, 0.8),
        octaves: span(2.0, 4.0),
        offset: None,
        persistence: None,
        lacunarity: None,
        palette: &NEUTRON_STAR_PALETTE,
        bloom: None,
        lighting: None,
        bump: None,
        liquid: None,
        rotation_speed: Some(span(30.0, 500.0)),
        airless: false,
        overrides: TypeOverride::FixedCurve(&NEUTRON_STAR_CURVE),
    },
    ObjectTypePreset {
        object_type: ObjectType::Asteroid,
        radius: span(5.0, 12.0),
        shapes: &[ShapeType::Type2],
        amplitude: span(1.0, 1.01),
        sharpness: span(0.18, 0.19),
        period: span(0.32, 0.8),
        octaves: fixed(16.0),
        offset: Some(fixed(2.0)),
        persistence: Some(span(0.475, 0.6)),
        lacunarity: Some(fixed(3.0)),
        palette: &ASTEROID_PALETTE,
        bloom: Some(BloomRanges {
            threshold: span(0.0, 0.1),
            strength: span(0.1, 0.2),
            radius: span(0.1, 0.2),
        }),
        lighting: Some(LightingRanges {
            specular: span(0.2, 0.5),
            shininess: span(2.0, 8.0),
        }),
        bump: Some(BumpRanges {
            strength: span(1.8, 2.0),
            offset: span(0.001, 0.008),
        }),
        liquid: None,
        rotation_speed: None,
        airless: true,
        overrides: TypeOverride::None,
    },
    ObjectTypePreset {
        object_type: ObjectType::Comet,
        radius: span(6.0, 9.0),
        shapes: &[ShapeType::Type1],
        amplitude: span(0.2, 0.4),
        sharpness: span(1.5, 3.0),
        period: span(0.9, 1.8),
        octaves: span(4.0, 7.0),
        offset: None,
        persistence: None,
        lacunarity: None,
        palette: &COMET_PALETTE,
        bloom: Some(BloomRanges {
            threshold: span(0.7, 0.9),
            strength: span(0.8, 1.2),
            radius: span(1.0, 1.3),
        }),
        lighting: Some(LightingRanges {
            specular: span(0.8, 1.8),
            shininess: span(10.0, 20.0),
        }),
        bump: Some(BumpRanges {
            strength: span(0.2, 0.4),
            offset: span(0.001, 0.005),
        }),
        liquid: None,
        rotation_speed: None,
        airless: false,
        overrides: TypeOverride::None,
    },
    ObjectTypePreset {
        object_type: ObjectType::Moon,
        radius: span(8.0, 12.0),
        shapes: &[ShapeType::Type3],
        amplitude: span(0.3, 0.6),
        sharpness: span(2.0, 4.0),
        period: span(0.4, 0.8),
        octaves: span(7.0, 9.0),
        offset: None,
        persistence: None,
        lacunarity: None,
        palette: &MOON_PALETTE,
        bloom: Some(BloomRanges {
            threshold: span(0.1, 0.2),
            strength: span(0.15, 0.25),
            radius: span(0.2, 0.3),
        }),
        lighting: Some(LightingRanges {
            specular: span(0.3, 0.6),
            shininess: span(3.0, 9.0),
        }),
        bump: Some(BumpRanges {
            strength: span(0.4, 0.7),
            offset: span(0.001, 0.006),
        }),
        liquid: None,
        rotation_speed: None,
        airless: true,
        overrides: TypeOverride::None,
    },
    ObjectTypePreset {
        object_type: ObjectType::RockyPlanet,
        radius: span(15.0, 22.0),
        shapes: &[ShapeType::Type2, ShapeType::Type3],
        amplitude: span(0.6, 1.1),
        sharpness: span(0.1, 1.0),
        period: span(0.768, 1.1),
        octaves: span(7.0, 10.0),
        offset: None,
        persistence: None,
        lacunarity: None,
        palette: &ROCKY_PALETTE,
        bloom: Some(BloomRanges {
            threshold: span(0.1, 0.2),
            strength: span(0.2, 0.3),
            radius: span(0.4, 0.5),
        }),
        lighting: Some(LightingRanges {
            specular: fixed(0.0),
            shininess: fixed(50.0),
        }),
        bump: Some(BumpRanges {
            strength: span(0.3, 0.6),
            offset: span(0.001, 0.005),
        }),
        liquid: None,
        rotation_speed: Some(span(0.042, 0.25)),
        airless: false,
        overrides: TypeOverride::LayeredRock(&ROCKY_STRATA),
    },
    ObjectTypePreset {
        object_type: ObjectType::LiquidPlanet,
        radius: span(15.0, 22.0),
        shapes: &[ShapeType::Type2, ShapeType::Type3],
        amplitude: span(0.6, 1.1),
        sharpness: span(1.5, 3.5),
        period: span(0.5, 1.1),
        octaves: span(7.0, 10.0),
        offset: None,
        persistence: None,
        lacunarity: None,
        palette: &LIQUID_PALETTE,
        bloom: Some(BloomRanges {
            threshold: span(0.1, 0.2),
            strength: span(0.2, 0.3),
            radius: span(0.4, 0.5),
        }),
        lighting: Some(LightingRanges {
            specular: span(0.5, 1.5),
            shininess: span(5.0, 15.0),
        }),
        bump: Some(BumpRanges {
            strength: span(0.3, 0.6),
            offset: span(0.001, 0.005),
        }),
        liquid: Some(LiquidRanges {
            wave_strength: span(0.1, 0.3),
            specular_intensity: span(1.0, 2.0),
            shininess: span(20.0, 40.0),
        }),
        rotation_speed: None,
        airless: false,
        overrides: TypeOverride::None,
    },
    ObjectTypePreset {
        object_type: ObjectType::Aquaplanet,
        radius: span(18.0, 25.0),
        shapes: &[ShapeType::Type1, ShapeType::Type2],
        amplitude: span(0.2, 0.4),
        sharpness: span(0.8, 2.2),
        period: span(0.9, 1.6),
        octaves: span(5.0, 8.0),
        offset: None,
        persistence: None,
        lacunarity: None,
        palette: &AQUAPLANET_PALETTE,
        bloom: Some(BloomRanges {
            threshold: span(0.2, 0.3),
            strength: span(0.3, 0.4),
            radius: span(0.4, 0.6),
        }),
        lighting: Some(LightingRanges {
            specular: span(1.0, 2.5),
            shininess: span(15.0, 25.0),
        }),
        bump: Some(BumpRanges {
            strength: span(0.1, 0.3),
            offset: span(0.001, 0.004),
        }),
        liquid: None,
        rotation_speed: None,
        airless: false,
        overrides: TypeOverride::None,
    },
    ObjectTypePreset {
        object_type: ObjectType::GasPlanet,
        radius: span(30.0, 50.0),
        shapes: &[ShapeType::Type1],
        amplitude: span(0.1, 0.3),
        sharpness: span(1.0, 2.0),
        period: span(1.2, 2.0),
        octaves: span(3.0, 5.0),
        offset: None,
        persistence: None,
        lacunarity: None,
        palette: &GAS_PLANET_PALETTE,
        bloom: Some(BloomRanges {
            threshold: span(0.1, 0.2),
            strength: span(0.2, 0.3),
            radius: span(0.5, 0.7),
        }),
        lighting: Some(LightingRanges {
            specular: span(0.1, 0.3),
            shininess: span(2.0, 8.0),
        }),
        bump: Some(BumpRanges {
            strength: span(0.0, 0.1),
            offset: span(0.001, 0.003),
        }),
        liquid: None,
        rotation_speed: None,
        airless: false,
        overrides: TypeOverride::None,
    },
];

/// Look up the preset for an object type
///
/// The table is laid out in declaration order, so the discriminant indexes it.
pub fn preset_for(object_type: ObjectType) -> &'static ObjectTypePreset {
    &PRESETS[object_type as usize]
}

/// Look up a preset by display name; unknown names yield `None`
pub fn preset_named(name: &str) -> Option<&'static ObjectTypePreset> {
    ObjectType::from_name(name).map(preset_for)
}
