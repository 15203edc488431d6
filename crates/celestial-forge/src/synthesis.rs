//! The randomize core: one preset in, one complete parameter set out
//!
//! [`synthesize`] never touches the live store. It clones the prior set,
//! rewrites it step by step and hands back the result for the caller to swap
//! in. Steps run in a fixed order so type overrides always win over the
//! generic sampling that precedes them.

use celestial_params::ParameterSet;
use celestial_presets::{
    BloomRanges, BumpRanges, FixedCurve, LayeredRock, LightingRanges, LiquidRanges,
    ObjectTypePreset, TerrainRanges,
};
use rand::Rng;
use tracing::debug;

use crate::config::ForgeConfig;
use crate::propagation::sync_atmosphere_radius;
use crate::sampling;

/// Build a new parameter set for `preset`
///
/// Parameters the preset does not vary keep their `prior` values.
pub fn synthesize(
    preset: &ObjectTypePreset,
    prior: &ParameterSet,
    config: &ForgeConfig,
    rng: &mut impl Rng,
) -> ParameterSet {
    let mut next = prior.clone();

    sample_shape(&mut next, preset, config, rng);
    sample_terrain(&mut next, preset, config, rng);

    match (preset.overrides.fixed_curve(), preset.overrides.layered_rock()) {
        (Some(curve), _) => apply_fixed_curve(&mut next, curve, rng),
        (None, Some(rock)) => apply_layered_rock(&mut next, rock, rng),
        (None, None) => {}
    }

    if let Some(colors) = sampling::palette_colors(rng, preset.palette, config.color_jitter) {
        next.planet.colors = colors;
    }

    if !preset.has_fixed_curve() {
        sample_surface_finish(&mut next, preset, config, rng);
    }

    sample_rotation(&mut next, preset, config, rng);

    next.planet.transitions = sampling::sorted_bands(rng, config.transition);
    next.planet.blends = sampling::independent(rng, config.blend);

    sample_atmosphere(&mut next, preset, config, rng);

    next.scene.body_visible = true;

    debug!(
        object_type = %preset.object_type,
        shape = %next.planet.shape,
        radius = next.planet.radius,
        octaves = next.planet.octaves,
        atmosphere = next.scene.atmosphere_visible,
        "synthesized body"
    );
    next
}

/// Step 1: radius, shell radius and shape family
fn sample_shape(
    next: &mut ParameterSet,
    preset: &ObjectTypePreset,
    config: &ForgeConfig,
    rng: &mut impl Rng,
) {
    next.planet.radius = preset.radius.sample(rng);
    sync_atmosphere_radius(next, config.atmosphere_margin);
    if let Some(shape) = sampling::choose(rng, preset.shapes) {
        next.planet.shape = shape;
    }
}

/// Step 2: generic terrain noise
fn sample_terrain(
    next: &mut ParameterSet,
    preset: &ObjectTypePreset,
    config: &ForgeConfig,
    rng: &mut impl Rng,
) {
    let planet = &mut next.planet;
    planet.amplitude = preset.amplitude.sample(rng);
    planet.sharpness = preset.sharpness.sample(rng);
    planet.period = preset.period.sample(rng);
    planet.octaves = sampling::sample_octaves(rng, preset.octaves);
    planet.offset = preset.offset.unwrap_or(config.offset).sample(rng);
    planet.persistence = preset.persistence.unwrap_or(config.persistence).sample(rng);
    planet.lacunarity = preset.lacunarity.unwrap_or(config.lacunarity).sample(rng);
}

/// Step 3a: shape-dependent rock strata
///
/// Only the fields a stratum declares are resampled; lacunarity is pinned for
/// every shape.
fn apply_layered_rock(next: &mut ParameterSet, rock: &LayeredRock, rng: &mut impl Rng) {
    let planet = &mut next.planet;
    planet.lacunarity = rock.lacunarity;

    let Some(stratum) = rock.stratum(planet.shape) else {
        return;
    };
    planet.amplitude = stratum.amplitude.sample(rng);
    planet.sharpness = stratum.sharpness.sample(rng);
    if let Some(period) = stratum.period {
        planet.period = period.sample(rng);
    }
    if let Some(octaves) = stratum.octaves {
        planet.octaves = sampling::sample_octaves(rng, octaves);
    }
    planet.offset = stratum.offset.sample(rng);
    planet.persistence = stratum.persistence.sample(rng);
    if let Some(shininess) = stratum.liquid_shininess {
        planet.liquid_shininess = shininess;
    }
}

/// Step 3b: the whole look comes from the curve
fn apply_fixed_curve(next: &mut ParameterSet, curve: &FixedCurve, rng: &mut impl Rng) {
    apply_terrain(next, &curve.terrain, rng);
    next.planet.ambient_intensity = curve.ambient.sample(rng);
    next.planet.diffuse_intensity = curve.diffuse.sample(rng);
    apply_lighting(next, &curve.lighting, rng);
    apply_bump(next, &curve.bump, rng);
    apply_liquid(next, &curve.liquid, rng);
    apply_bloom(next, &curve.bloom, rng);
    next.atmosphere.opacity = curve.atmosphere_opacity.sample(rng);
}

/// Step 5: bloom, lighting, bump and liquid from the preset's optional blocks
///
/// Ambient and diffuse always take the baseline here.
fn sample_surface_finish(
    next: &mut ParameterSet,
    preset: &ObjectTypePreset,
    config: &ForgeConfig,
    rng: &mut impl Rng,
) {
    if let Some(bloom) = &preset.bloom {
        apply_bloom(next, bloom, rng);
    }
    next.planet.ambient_intensity = config.ambient_baseline;
    next.planet.diffuse_intensity = config.diffuse_baseline;
    if let Some(lighting) = &preset.lighting {
        apply_lighting(next, lighting, rng);
    }
    if let Some(bump) = &preset.bump {
        apply_bump(next, bump, rng);
    }
    if let Some(liquid) = &preset.liquid {
        apply_liquid(next, liquid, rng);
    }
}

/// Step 6: shared spin when the preset declares one, independent otherwise
fn sample_rotation(
    next: &mut ParameterSet,
    preset: &ObjectTypePreset,
    config: &ForgeConfig,
    rng: &mut impl Rng,
) {
    match preset.rotation_speed {
        Some(range) => {
            let speed = range.sample(rng);
            next.planet.rotation_speed = speed;
            next.atmosphere.rotation_speed = speed;
            next.scene.rotation_locked = true;
        }
        None => {
            next.planet.rotation_speed = config.rotation_speed.sample(rng);
            next.atmosphere.rotation_speed = config.rotation_speed.sample(rng);
            next.scene.rotation_locked = false;
        }
    }
}

/// Step 8: shell visibility, color and opacity
fn sample_atmosphere(
    next: &mut ParameterSet,
    preset: &ObjectTypePreset,
    config: &ForgeConfig,
    rng: &mut impl Rng,
) {
    if preset.airless {
        next.scene.atmosphere_visible = false;
        return;
    }
    next.scene.atmosphere_visible = true;
    next.atmosphere.color = sampling::random_color(rng);
    // A fixed curve already pinned the opacity in step 3
    if !preset.has_fixed_curve() {
        next.atmosphere.opacity = config.atmosphere_opacity.sample(rng);
    }
}

fn apply_terrain(next: &mut ParameterSet, terrain: &TerrainRanges, rng: &mut impl Rng) {
    let planet = &mut next.planet;
    planet.amplitude = terrain.amplitude.sample(rng);
    planet.sharpness = terrain.sharpness.sample(rng);
    planet.period = terrain.period.sample(rng);
    planet.octaves = sampling::sample_octaves(rng, terrain.octaves);
    planet.offset = terrain.offset.sample(rng);
    planet.persistence = terrain.persistence.sample(rng);
    planet.lacunarity = terrain.lacunarity.sample(rng);
}

fn apply_lighting(next: &mut ParameterSet, lighting: &LightingRanges, rng: &mut impl Rng) {
    let planet = &mut next.planet;
    planet.specular_intensity = lighting.specular.sample(rng);
    planet.shininess = lighting.shininess.sample(rng);
}

fn apply_bump(next: &mut ParameterSet, bump: &BumpRanges, rng: &mut impl Rng) {
    next.planet.bump_strength = bump.strength.sample(rng);
    next.planet.bump_offset = bump.offset.sample(rng);
}

fn apply_liquid(next: &mut ParameterSet, liquid: &LiquidRanges, rng: &mut impl Rng) {
    let planet = &mut next.planet;
    planet.liquid_wave_strength = liquid.wave_strength.sample(rng);
    planet.liquid_specular_intensity = liquid.specular_intensity.sample(rng);
    planet.liquid_shininess = liquid.shininess.sample(rng);
}

fn apply_bloom(next: &mut ParameterSet, bloom: &BloomRanges, rng: &mut impl Rng) {
    next.bloom.threshold = bloom.threshold.sample(rng);
    next.bloom.strength = bloom.strength.sample(rng);
    next.bloom.radius = bloom.radius.sample(rng);
}
