use std::collections::HashSet;

use approx::assert_relative_eq;
use nalgebra::Vector3;

use crate::color::Rgb;
use crate::error::ParamError;
use crate::parameter_set::ParameterSet;
use crate::registry::{self, ALIASES, PARAMS};
use crate::values::{Axis, ParamKind, ParamValue, ShapeType};

#[test]
fn test_names_are_unique() {
    let mut seen = HashSet::new();
    for name in registry::names() {
        assert!(seen.insert(name), "duplicate parameter name {name}");
    }
}

#[test]
fn test_every_getter_reports_its_declared_kind() {
    let params = ParameterSet::default();
    for spec in PARAMS {
        assert_eq!(spec.get(&params).kind(), spec.kind, "{}", spec.name);
    }
}

#[test]
fn test_ranges_are_closed_intervals() {
    for spec in PARAMS {
        if let Some((lo, hi)) = spec.range {
            assert!(lo <= hi, "{} has inverted range", spec.name);
        }
    }
}

#[test]
fn test_defaults_lie_inside_edit_ranges() {
    let params = ParameterSet::default();
    for spec in PARAMS {
        let Some((lo, hi)) = spec.range else { continue };
        match spec.get(&params) {
            ParamValue::Float(v) => assert!(v >= lo && v <= hi, "{} = {v}", spec.name),
            ParamValue::Int(v) => {
                assert!(v as f64 >= lo && v as f64 <= hi, "{} = {v}", spec.name)
            }
            _ => {}
        }
    }
}

#[test]
fn test_aliases_point_at_real_parameters() {
    for (alias, target) in ALIASES {
        let spec = registry::spec(alias).expect("alias resolves");
        assert_eq!(spec.name, *target);
    }
}

#[test]
fn test_light_direction_aliases_read_the_same_value() {
    let mut params = ParameterSet::default();
    params.light.direction = Vector3::new(0.0, 2.0, 0.0);

    let planet = registry::get(&params, "planet.lightDirection").unwrap();
    let atmosphere = registry::get(&params, "atmosphere.lightDirection").unwrap();
    assert_eq!(planet, atmosphere);
    assert_eq!(planet, ParamValue::Vector(Vector3::new(0.0, 2.0, 0.0)));
}

#[test]
fn test_get_reads_indexed_fields() {
    let params = ParameterSet::default();
    assert_relative_eq!(
        registry::get_float(&params, "planet.transition5").unwrap(),
        1.2
    );
    assert_eq!(
        registry::get(&params, "planet.color1").unwrap(),
        ParamValue::Color(Rgb::new(0.014, 0.117, 0.279))
    );
    assert_eq!(
        registry::get(&params, "planet.type").unwrap(),
        ParamValue::Shape(ShapeType::Type2)
    );
    assert_eq!(
        registry::get(&params, "planet.rotationDirection").unwrap(),
        ParamValue::Axis(Axis::Y)
    );
}

#[test]
fn test_get_unknown_name_errors() {
    let params = ParameterSet::default();
    assert_eq!(
        registry::get(&params, "planet.nope"),
        Err(ParamError::UnknownParameter("planet.nope".to_string()))
    );
}

#[test]
fn test_get_float_on_color_is_a_kind_mismatch() {
    let params = ParameterSet::default();
    let err = registry::get_float(&params, "planet.color2").unwrap_err();
    assert_eq!(
        err,
        ParamError::KindMismatch {
            name: "planet.color2".to_string(),
            expected: ParamKind::Float,
            found: ParamKind::Color,
        }
    );
}

#[test]
fn test_coerce_clamps_floats_ints_and_colors() {
    let radius = registry::spec("planet.radius").unwrap();
    assert_eq!(radius.coerce(ParamValue::Float(80.0)), Ok(ParamValue::Float(50.0)));
    assert_eq!(radius.coerce(ParamValue::Float(0.0)), Ok(ParamValue::Float(1.0)));

    let octaves = registry::spec("planet.octaves").unwrap();
    assert_eq!(octaves.coerce(ParamValue::Int(40)), Ok(ParamValue::Int(16)));
    assert_eq!(octaves.coerce(ParamValue::Int(0)), Ok(ParamValue::Int(1)));

    let color = registry::spec("planet.color3").unwrap();
    assert_eq!(
        color.coerce(ParamValue::Color(Rgb::new(1.5, -0.5, 0.5))),
        Ok(ParamValue::Color(Rgb::new(1.0, 0.0, 0.5)))
    );
}

#[test]
fn test_coerce_rejects_wrong_kind_and_nan() {
    let radius = registry::spec("planet.radius").unwrap();
    assert!(matches!(
        radius.coerce(ParamValue::Int(3)),
        Err(ParamError::KindMismatch { .. })
    ));
    assert_eq!(
        radius.coerce(ParamValue::Float(f64::NAN)),
        Err(ParamError::NotFinite("planet.radius".to_string()))
    );
}

#[test]
fn test_derived_and_clock_parameters_are_read_only() {
    for name in [
        "atmosphere.radius",
        "atmosphere.time",
        "scene.bodyVisible",
        "scene.rotationLocked",
    ] {
        assert!(!registry::spec(name).unwrap().writable, "{name}");
    }
    assert!(registry::spec("planet.radius").unwrap().writable);
}
