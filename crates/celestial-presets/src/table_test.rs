use approx::assert_relative_eq;
use celestial_params::ShapeType;

use crate::object_type::ObjectType;
use crate::table::{PRESETS, preset_for, preset_named};

#[test]
fn test_table_follows_object_type_order() {
    for (i, object_type) in ObjectType::ALL.into_iter().enumerate() {
        assert_eq!(PRESETS[i].object_type, object_type);
        assert_eq!(preset_for(object_type).object_type, object_type);
    }
}

#[test]
fn test_every_preset_satisfies_invariants() {
    for preset in &PRESETS {
        if let Err(e) = preset.validate() {
            panic!("{e}");
        }
    }
}

#[test]
fn test_preset_named_tolerates_unknown_names() {
    assert!(preset_named("NotARealType").is_none());
    assert_eq!(
        preset_named("Rocky Planet").map(|p| p.object_type),
        Some(ObjectType::RockyPlanet)
    );
}

#[test]
fn test_stellar_bodies_use_fixed_curves() {
    assert!(preset_for(ObjectType::Star).has_fixed_curve());
    assert!(preset_for(ObjectType::NeutronStar).has_fixed_curve());
    assert!(!preset_for(ObjectType::Moon).has_fixed_curve());
    assert!(!preset_for(ObjectType::RockyPlanet).has_fixed_curve());
}

#[test]
fn test_airless_bodies() {
    let airless: Vec<_> = PRESETS
        .iter()
        .filter(|p| p.airless)
        .map(|p| p.object_type)
        .collect();
    assert_eq!(airless, vec![ObjectType::Asteroid, ObjectType::Moon]);
}

#[test]
fn test_rocky_strata_cover_every_rocky_shape() {
    let rocky = preset_for(ObjectType::RockyPlanet);
    let rock = rocky.overrides.layered_rock().expect("rocky planet has strata");

    for shape in rocky.shapes {
        assert!(rock.stratum(*shape).is_some(), "no stratum for {shape}");
    }
    assert!(rock.stratum(ShapeType::Type1).is_none());
    assert_relative_eq!(rock.lacunarity, 3.0);
}

#[test]
fn test_star_curve_brightens_ambient() {
    let curve = preset_for(ObjectType::Star)
        .overrides
        .fixed_curve()
        .expect("star has a curve");
    assert_relative_eq!(curve.ambient.lo, 0.346);
    assert_relative_eq!(curve.ambient.hi, 0.5);
    assert_relative_eq!(curve.lighting.specular.lo, 1.0);
}

#[test]
fn test_only_liquid_planet_has_a_liquid_block() {
    let with_liquid: Vec<_> = PRESETS
        .iter()
        .filter(|p| p.liquid.is_some())
        .map(|p| p.object_type)
        .collect();
    assert_eq!(with_liquid, vec![ObjectType::LiquidPlanet]);
}
