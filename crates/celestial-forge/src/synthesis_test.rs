//! Tests for the synthesis steps

use approx::assert_relative_eq;
use celestial_params::{ParameterSet, ShapeType};
use celestial_presets::{ObjectType, preset_for};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::config::ForgeConfig;
use crate::synthesis::synthesize;

fn forge(object_type: ObjectType, seed: u64) -> ParameterSet {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    synthesize(
        preset_for(object_type),
        &ParameterSet::default(),
        &ForgeConfig::default(),
        &mut rng,
    )
}

#[test]
fn test_body_becomes_visible() {
    let prior = ParameterSet::default();
    assert!(!prior.scene.body_visible);
    for object_type in ObjectType::ALL {
        assert!(forge(object_type, 1).scene.body_visible, "{object_type}");
    }
}

#[test]
fn test_prior_is_not_modified() {
    let prior = ParameterSet::default();
    let mut rng = ChaChaRng::seed_from_u64(3);
    let next = synthesize(
        preset_for(ObjectType::GasPlanet),
        &prior,
        &ForgeConfig::default(),
        &mut rng,
    );
    assert_eq!(prior, ParameterSet::default());
    assert_ne!(next, prior);
}

#[test]
fn test_atmosphere_radius_follows_planet() {
    for seed in 0..50 {
        let params = forge(ObjectType::Moon, seed);
        assert_relative_eq!(params.atmosphere.radius, params.planet.radius + 1.0);
    }
}

#[test]
fn test_custom_margin_applies() {
    let config = ForgeConfig {
        atmosphere_margin: 3.0,
        ..ForgeConfig::default()
    };
    let mut rng = ChaChaRng::seed_from_u64(9);
    let params = synthesize(
        preset_for(ObjectType::Aquaplanet),
        &ParameterSet::default(),
        &config,
        &mut rng,
    );
    assert_relative_eq!(params.atmosphere.radius, params.planet.radius + 3.0);
}

#[test]
fn test_star_follows_fixed_curve() {
    for seed in 0..50 {
        let params = forge(ObjectType::Star, seed);
        let planet = &params.planet;
        assert_relative_eq!(planet.amplitude, 2.0);
        assert_relative_eq!(planet.sharpness, 10.0);
        assert_relative_eq!(planet.period, 0.0);
        assert_eq!(planet.octaves, 16);
        assert_relative_eq!(planet.persistence, 0.0);
        assert_relative_eq!(planet.lacunarity, 1.0);
        assert!((0.346..=0.5).contains(&planet.ambient_intensity));
        assert_relative_eq!(planet.specular_intensity, 1.0);
        assert_relative_eq!(planet.bump_strength, 2.0);
        assert_relative_eq!(planet.liquid_specular_intensity, 5.0);
        assert_relative_eq!(params.bloom.strength, 1.0);
        assert_relative_eq!(params.atmosphere.opacity, 1.0);
    }
}

#[test]
fn test_neutron_star_bloom_from_curve() {
    for seed in 0..50 {
        let params = forge(ObjectType::NeutronStar, seed);
        assert!((0.5..=1.0).contains(&params.bloom.strength));
        assert_relative_eq!(params.planet.amplitude, 0.0);
        assert_relative_eq!(params.planet.bump_strength, 0.371);
        assert!((0.0..=1.0).contains(&params.atmosphere.opacity));
    }
}

#[test]
fn test_rocky_strata_by_shape() {
    let mut seen = [false; 2];
    for seed in 0..200 {
        let params = forge(ObjectType::RockyPlanet, seed);
        let planet = &params.planet;
        assert_relative_eq!(planet.lacunarity, 3.0);
        match planet.shape {
            ShapeType::Type2 => {
                seen[0] = true;
                assert!((0.918..=1.2).contains(&planet.amplitude));
                assert!((2.12..=2.64).contains(&planet.sharpness));
                assert!((0.684..=1.2).contains(&planet.period));
                assert_eq!(planet.octaves, 16);
                assert!((-0.222..=2.0).contains(&planet.offset));
                assert!((0.366..=0.459).contains(&planet.persistence));
                assert_relative_eq!(planet.liquid_shininess, 100.0);
            }
            ShapeType::Type3 => {
                seen[1] = true;
                assert!((1.2..=1.5).contains(&planet.amplitude));
                assert!((3.0..=5.0).contains(&planet.sharpness));
                assert!((0.333..=2.0).contains(&planet.offset));
                assert!((0.4..=0.44).contains(&planet.persistence));
                // Generic sampling still owns period and octaves
                assert!((0.768..=1.1).contains(&planet.period));
                assert!((7..=10).contains(&planet.octaves));
            }
            ShapeType::Type1 => panic!("rocky planets never use Type1"),
        }
    }
    assert_eq!(seen, [true, true], "both strata should be exercised");
}

#[test]
fn test_lighting_baseline_without_ranges() {
    let params = forge(ObjectType::GasPlanet, 5);
    assert_relative_eq!(params.planet.ambient_intensity, 0.062);
    assert_relative_eq!(params.planet.diffuse_intensity, 1.0);
}

#[test]
fn test_asteroid_lighting_uses_baseline() {
    let lighting = preset_for(ObjectType::Asteroid).lighting.unwrap();
    for seed in 0..50 {
        let params = forge(ObjectType::Asteroid, seed);
        let planet = &params.planet;
        assert_relative_eq!(planet.ambient_intensity, 0.062);
        assert_relative_eq!(planet.diffuse_intensity, 1.0);
        assert!(lighting.specular.contains(planet.specular_intensity));
        assert!(lighting.shininess.contains(planet.shininess));
        assert_relative_eq!(planet.offset, 2.0);
        assert_relative_eq!(planet.lacunarity, 3.0);
        assert!((0.475..=0.6).contains(&planet.persistence));
    }
}

#[test]
fn test_baseline_follows_config() {
    let config = ForgeConfig {
        ambient_baseline: 0.3,
        diffuse_baseline: 0.8,
        ..ForgeConfig::default()
    };
    for object_type in ObjectType::ALL {
        let preset = preset_for(object_type);
        if preset.has_fixed_curve() {
            continue;
        }
        let mut rng = ChaChaRng::seed_from_u64(12);
        let params = synthesize(preset, &ParameterSet::default(), &config, &mut rng);
        assert_relative_eq!(params.planet.ambient_intensity, 0.3);
        assert_relative_eq!(params.planet.diffuse_intensity, 0.8);
    }
}

#[test]
fn test_missing_liquid_block_keeps_prior() {
    let mut prior = ParameterSet::default();
    prior.planet.liquid_wave_strength = 0.77;
    let mut rng = ChaChaRng::seed_from_u64(11);
    let params = synthesize(
        preset_for(ObjectType::Moon),
        &prior,
        &ForgeConfig::default(),
        &mut rng,
    );
    assert_relative_eq!(params.planet.liquid_wave_strength, 0.77);
}

#[test]
fn test_liquid_block_sampled() {
    for seed in 0..20 {
        let params = forge(ObjectType::LiquidPlanet, seed);
        let liquid = preset_for(ObjectType::LiquidPlanet).liquid.unwrap();
        assert!(liquid.wave_strength.contains(params.planet.liquid_wave_strength));
        assert!(liquid.shininess.contains(params.planet.liquid_shininess));
    }
}

#[test]
fn test_rotation_lockstep_sets_flag() {
    let params = forge(ObjectType::Star, 4);
    assert!(params.scene.rotation_locked);
    assert_eq!(
        params.planet.rotation_speed.to_bits(),
        params.atmosphere.rotation_speed.to_bits()
    );

    let params = forge(ObjectType::Comet, 4);
    assert!(!params.scene.rotation_locked);
    assert!((0.0..=0.5).contains(&params.planet.rotation_speed));
    assert!((0.0..=0.5).contains(&params.atmosphere.rotation_speed));
}

#[test]
fn test_airless_hides_atmosphere() {
    for object_type in [ObjectType::Asteroid, ObjectType::Moon] {
        assert!(!forge(object_type, 2).scene.atmosphere_visible);
    }
    let params = forge(ObjectType::Aquaplanet, 2);
    assert!(params.scene.atmosphere_visible);
    assert!((0.3..=0.6).contains(&params.atmosphere.opacity));
}

#[test]
fn test_atmosphere_reappears_after_airless() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let config = ForgeConfig::default();
    let moon = synthesize(
        preset_for(ObjectType::Moon),
        &ParameterSet::default(),
        &config,
        &mut rng,
    );
    let gas = synthesize(preset_for(ObjectType::GasPlanet), &moon, &config, &mut rng);
    assert!(!moon.scene.atmosphere_visible);
    assert!(gas.scene.atmosphere_visible);
}

#[test]
fn test_rotation_axis_untouched() {
    let mut prior = ParameterSet::default();
    prior.planet.rotation_direction = celestial_params::Axis::Z;
    let mut rng = ChaChaRng::seed_from_u64(6);
    let params = synthesize(
        preset_for(ObjectType::Star),
        &prior,
        &ForgeConfig::default(),
        &mut rng,
    );
    assert_eq!(params.planet.rotation_direction, celestial_params::Axis::Z);
}
