//! Tests for the scene controller and its collaborators

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use celestial_params::{ChangeOrigin, ParamError, ParamValue, ParameterSet};
use celestial_presets::ObjectType;

use crate::config::ForgeConfig;
use crate::scene::{EditSurface, Headless, RenderConsumer, Scene, object_types};

/// Records every call the scene makes
#[derive(Debug, Default)]
struct RecordingRender {
    body_visible: Option<bool>,
    atmosphere_visible: Option<bool>,
    rebuilds: usize,
}

impl RenderConsumer for RecordingRender {
    fn set_body_visible(&mut self, visible: bool) {
        self.body_visible = Some(visible);
    }

    fn set_atmosphere_visible(&mut self, visible: bool) {
        self.atmosphere_visible = Some(visible);
    }

    fn rebuild_atmosphere(&mut self, _params: &ParameterSet) {
        self.rebuilds += 1;
    }
}

#[derive(Debug, Default)]
struct RecordingEdit {
    refreshes: usize,
    last_radius: Option<f64>,
}

impl EditSurface for RecordingEdit {
    fn refresh_display(&mut self, params: &ParameterSet) {
        self.refreshes += 1;
        self.last_radius = Some(params.planet.radius);
    }
}

fn recording_scene() -> Scene<RecordingRender, RecordingEdit> {
    Scene::new(
        ForgeConfig::default(),
        RecordingRender::default(),
        RecordingEdit::default(),
    )
}

#[test]
fn test_new_scene_has_defaults() {
    let scene = Scene::headless();
    let params = scene.snapshot();
    assert!(!params.scene.body_visible);
    assert_relative_eq!(params.atmosphere.radius, params.planet.radius + 1.0);
}

#[test]
fn test_randomize_notifies_collaborators() {
    let mut scene = recording_scene();
    scene.randomize_with_seed("Gas Planet", 1);

    assert_eq!(scene.render().body_visible, Some(true));
    assert_eq!(scene.render().atmosphere_visible, Some(true));
    assert_eq!(scene.render().rebuilds, 1);
    assert_eq!(scene.edit().refreshes, 1);
    assert_eq!(scene.edit().last_radius, Some(scene.snapshot().planet.radius));
}

#[test]
fn test_randomize_airless_hides_shell() {
    let mut scene = recording_scene();
    scene.randomize_with_seed("Moon", 1);
    assert_eq!(scene.render().atmosphere_visible, Some(false));
}

#[test]
fn test_unknown_type_is_noop() {
    let mut scene = recording_scene();
    scene.randomize_with_seed("Rocky Planet", 5);
    let before = scene.snapshot().clone();

    scene.randomize("NotARealType");

    assert_eq!(scene.snapshot(), &before);
    assert_eq!(scene.render().rebuilds, 1);
    assert_eq!(scene.edit().refreshes, 1);
}

#[test]
fn test_randomize_with_entropy_produces_valid_body() {
    let mut scene = Scene::headless();
    scene.randomize("Aquaplanet");
    let params = scene.snapshot();
    assert!(params.scene.body_visible);
    assert!(params.planet.bands_ordered());
}

#[test]
fn test_radius_edit_rebuilds_atmosphere() {
    let mut scene = recording_scene();
    let outcome = scene.set("planet.radius", 30.0).unwrap();

    assert_eq!(outcome.derived, vec!["atmosphere.radius"]);
    assert_relative_eq!(scene.snapshot().atmosphere.radius, 31.0);
    assert_eq!(scene.render().rebuilds, 1);
}

#[test]
fn test_unrelated_edit_does_not_rebuild() {
    let mut scene = recording_scene();
    scene.set("planet.amplitude", 0.5).unwrap();
    assert_eq!(scene.render().rebuilds, 0);
}

#[test]
fn test_out_of_range_edit_clamps() {
    let mut scene = Scene::headless();
    let outcome = scene.set("planet.radius", 500.0).unwrap();
    assert!(outcome.clamped);
    assert_eq!(scene.get("planet.radius").unwrap(), ParamValue::Float(50.0));
    assert_relative_eq!(scene.snapshot().atmosphere.radius, 51.0);
}

#[test]
fn test_rejected_edits_leave_store_unchanged() {
    let mut scene = Scene::headless();
    let before = scene.snapshot().clone();

    assert!(matches!(
        scene.set("planet.nope", 1.0),
        Err(ParamError::UnknownParameter(_))
    ));
    assert!(matches!(
        scene.set("planet.radius", 3_u32),
        Err(ParamError::KindMismatch { .. })
    ));
    assert!(matches!(
        scene.set("atmosphere.radius", 3.0),
        Err(ParamError::ReadOnly(_))
    ));
    assert_eq!(scene.snapshot(), &before);
}

#[test]
fn test_locked_rotation_follows_edit() {
    let mut scene = Scene::headless();
    scene.randomize_with_seed("Rocky Planet", 2);
    assert!(scene.snapshot().scene.rotation_locked);

    scene.set("planet.rotationSpeed", 0.1).unwrap();
    let params = scene.snapshot();
    assert_relative_eq!(params.atmosphere.rotation_speed, 0.1);
}

#[test]
fn test_unlocked_rotation_is_independent() {
    let mut scene = Scene::headless();
    scene.randomize_with_seed("Comet", 2);
    let shell_speed = scene.snapshot().atmosphere.rotation_speed;

    scene.set("planet.rotationSpeed", 0.45).unwrap();
    assert_relative_eq!(scene.snapshot().atmosphere.rotation_speed, shell_speed);
}

#[test]
fn test_light_direction_alias_shared() {
    let mut scene = Scene::headless();
    let direction = nalgebra::Vector3::new(0.0, 1.0, 0.0);
    scene.set("atmosphere.lightDirection", direction).unwrap();

    let params = scene.snapshot();
    assert_eq!(params.planet_light_direction(), &direction);
    assert_eq!(
        scene.get("planet.lightDirection").unwrap(),
        ParamValue::Vector(direction)
    );
}

#[test]
fn test_subscribers_see_edit_and_derived() {
    let mut scene = Scene::headless();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = scene.subscribe(move |change| sink.borrow_mut().push((change.name, change.origin)));

    scene.set("planet.radius", 10.0).unwrap();
    assert_eq!(
        *seen.borrow(),
        vec![
            ("planet.radius", ChangeOrigin::Edit),
            ("atmosphere.radius", ChangeOrigin::Derived),
        ]
    );

    assert!(scene.unsubscribe(id));
    scene.set("planet.radius", 12.0).unwrap();
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_advance_frame() {
    let mut scene = Scene::headless();
    scene.advance_frame(1.25);
    scene.advance_frame(1.5);

    let atmosphere = &scene.snapshot().atmosphere;
    assert_relative_eq!(atmosphere.time, 1.5);
    assert_relative_eq!(atmosphere.rotation, 0.0004);
}

#[test]
fn test_object_type_catalogue() {
    let names: Vec<_> = object_types().collect();
    assert_eq!(names.len(), 9);
    assert_eq!(names[0], "Star");
    assert_eq!(names[3], "Shooting Star (Comet)");
    assert_eq!(names[8], "Gas Planet");
}

#[test]
fn test_headless_default() {
    let scene: Scene<Headless, Headless> = Scene::default();
    assert_eq!(scene.config(), &ForgeConfig::default());
}

#[test]
fn test_selection_defaults_to_star() {
    let scene = Scene::headless();
    assert_eq!(scene.selected(), ObjectType::Star);
}

#[test]
fn test_randomize_updates_selection() {
    let mut scene = Scene::headless();
    scene.randomize_with_seed("Moon", 3);
    assert_eq!(scene.selected(), ObjectType::Moon);

    scene.randomize_with_seed("NotARealType", 3);
    assert_eq!(scene.selected(), ObjectType::Moon);
}

#[test]
fn test_select_rejects_unknown_names() {
    let mut scene = Scene::headless();
    assert!(scene.select("Gas Planet"));
    assert_eq!(scene.selected(), ObjectType::GasPlanet);
    assert!(!scene.select("NotARealType"));
    assert_eq!(scene.selected(), ObjectType::GasPlanet);
    // Selecting alone does not generate
    assert!(!scene.snapshot().scene.body_visible);
}

#[test]
fn test_regenerate_rerolls_selection() {
    let mut scene = recording_scene();
    scene.select("Asteroid");
    scene.regenerate_with_seed(4);

    let first = scene.snapshot().clone();
    assert!(first.scene.body_visible);
    assert!(!first.scene.atmosphere_visible);
    assert_eq!(scene.render().rebuilds, 1);
    assert_eq!(scene.edit().refreshes, 1);

    scene.regenerate_with_seed(5);
    assert_ne!(scene.snapshot(), &first);
    assert!(!scene.snapshot().scene.atmosphere_visible);
    assert_eq!(scene.selected(), ObjectType::Asteroid);
}

#[test]
fn test_regenerate_matches_randomize_of_selection() {
    let mut a = Scene::headless();
    a.select("Aquaplanet");
    a.regenerate_with_seed(21);

    let mut b = Scene::headless();
    b.randomize_with_seed("Aquaplanet", 21);

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_load_generates_default_selection() {
    let scene = Scene::load_with_seed(
        ForgeConfig::default(),
        RecordingRender::default(),
        RecordingEdit::default(),
        8,
    );
    let params = scene.snapshot();
    assert!(params.scene.body_visible);
    assert_eq!(scene.selected(), ObjectType::Star);
    assert_relative_eq!(params.planet.sharpness, 10.0);
    assert_eq!(scene.render().body_visible, Some(true));
}

#[test]
fn test_load_with_entropy_is_visible() {
    let mut scene = Scene::load(ForgeConfig::default(), Headless, Headless);
    assert!(scene.snapshot().scene.body_visible);
    scene.regenerate();
    assert!(scene.snapshot().scene.body_visible);
}
