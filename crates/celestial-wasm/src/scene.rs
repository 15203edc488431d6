//! Long-lived scenes held in thread-local storage
//!
//! WASM is single-threaded, so each scene lives in a thread-local map and JS
//! refers to it by an opaque id. The renderer and edit UI live on the JS side;
//! the scene records what they need to do and JS drains it once per frame
//! with [`scene_take_updates`].
//!
//! Every generating call takes a seed from JavaScript; nothing here reads OS
//! entropy.

use std::cell::RefCell;
use std::collections::HashMap;

use celestial_forge::{EditSurface, ForgeConfig, RenderConsumer, Scene};
use celestial_params::{ParamValue, ParameterSet, registry};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{from_js, to_js};

// =============================================================================
// Collaborators that queue work for JavaScript
// =============================================================================

/// Render-side work queued since the last drain
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderUpdates {
    /// Latest requested body visibility, if it changed
    pub body_visible: Option<bool>,
    pub atmosphere_visible: Option<bool>,
    /// The particle shell must be regenerated
    pub rebuild_atmosphere: bool,
    /// Every bound control must be re-read
    pub refresh_display: bool,
}

#[derive(Debug, Default)]
pub(crate) struct QueuedRender(pub(crate) RenderUpdates);

impl RenderConsumer for QueuedRender {
    fn set_body_visible(&mut self, visible: bool) {
        self.0.body_visible = Some(visible);
    }

    fn set_atmosphere_visible(&mut self, visible: bool) {
        self.0.atmosphere_visible = Some(visible);
    }

    fn rebuild_atmosphere(&mut self, _params: &ParameterSet) {
        self.0.rebuild_atmosphere = true;
    }
}

#[derive(Debug, Default)]
pub(crate) struct QueuedEdit {
    pub(crate) refresh: bool,
}

impl EditSurface for QueuedEdit {
    fn refresh_display(&mut self, _params: &ParameterSet) {
        self.refresh = true;
    }
}

pub(crate) type WasmScene = Scene<QueuedRender, QueuedEdit>;

thread_local! {
    static SCENES: RefCell<HashMap<u32, WasmScene>> = RefCell::new(HashMap::new());
    static NEXT_SCENE_ID: RefCell<u32> = const { RefCell::new(0) };
}

fn insert_scene(scene: WasmScene) -> u32 {
    let id = NEXT_SCENE_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    SCENES.with(|scenes| {
        scenes.borrow_mut().insert(id, scene);
    });

    id
}

fn with_scene<T>(
    scene_id: u32,
    f: impl FnOnce(&mut WasmScene) -> Result<T, JsError>,
) -> Result<T, JsError> {
    SCENES.with(|scenes| {
        let mut scenes = scenes.borrow_mut();
        let scene = scenes
            .get_mut(&scene_id)
            .ok_or_else(|| JsError::new(&format!("Scene {} not found", scene_id)))?;
        f(scene)
    })
}

/// Result of a manual edit as seen from JavaScript
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditReport {
    pub name: &'static str,
    pub applied: ParamValue,
    pub clamped: bool,
    pub derived: Vec<&'static str>,
}

// =============================================================================
// Scene management
// =============================================================================

/// Create a scene with default generator settings.
///
/// The default selection (Star) is generated once from `seed`, so the first
/// drained update already shows a body.
///
/// Returns a scene ID for use with other functions.
#[wasm_bindgen]
pub fn scene_create(seed: u64) -> u32 {
    insert_scene(Scene::load_with_seed(
        ForgeConfig::default(),
        QueuedRender::default(),
        QueuedEdit::default(),
        seed,
    ))
}

/// Create a scene with a partial generator config.
///
/// Missing keys take their defaults; inverted ranges are rejected.
#[wasm_bindgen]
pub fn scene_create_with_config(config: JsValue, seed: u64) -> Result<u32, JsError> {
    let config: ForgeConfig = from_js(config)?;
    config.validate().map_err(|e| JsError::new(&e.to_string()))?;
    Ok(insert_scene(Scene::load_with_seed(
        config,
        QueuedRender::default(),
        QueuedEdit::default(),
        seed,
    )))
}

/// Delete a scene to free memory.
#[wasm_bindgen]
pub fn scene_delete(scene_id: u32) {
    SCENES.with(|scenes| {
        scenes.borrow_mut().remove(&scene_id);
    });
}

// =============================================================================
// Synthesis and editing
// =============================================================================

/// Randomize the scene from an object type and select it.
///
/// Unknown types are ignored. The same seed yields the same body.
#[wasm_bindgen]
pub fn scene_randomize(scene_id: u32, object_type: &str, seed: u64) -> Result<(), JsError> {
    with_scene(scene_id, |scene| {
        scene.randomize_with_seed(object_type, seed);
        Ok(())
    })
}

/// Pick the object type for [`scene_regenerate`]; false for unknown names.
#[wasm_bindgen]
pub fn scene_select(scene_id: u32, object_type: &str) -> Result<bool, JsError> {
    with_scene(scene_id, |scene| Ok(scene.select(object_type)))
}

/// Display name of the selected object type.
#[wasm_bindgen]
pub fn scene_selected(scene_id: u32) -> Result<String, JsError> {
    with_scene(scene_id, |scene| Ok(scene.selected().name().to_string()))
}

/// Re-roll the selected object type.
#[wasm_bindgen]
pub fn scene_regenerate(scene_id: u32, seed: u64) -> Result<(), JsError> {
    with_scene(scene_id, |scene| {
        scene.regenerate_with_seed(seed);
        Ok(())
    })
}

/// Read one parameter as a tagged value.
#[wasm_bindgen]
pub fn scene_get(scene_id: u32, name: &str) -> Result<JsValue, JsError> {
    with_scene(scene_id, |scene| {
        let value = scene.get(name).map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&value)
    })
}

/// Shorthand read for float parameters.
#[wasm_bindgen]
pub fn scene_get_float(scene_id: u32, name: &str) -> Result<f64, JsError> {
    with_scene(scene_id, |scene| {
        registry::get_float(scene.snapshot(), name).map_err(|e| JsError::new(&e.to_string()))
    })
}

/// Write one parameter.
///
/// # Arguments
/// * `name` - Parameter name or alias, e.g. "planet.radius"
/// * `value` - Tagged value, e.g. `{ kind: "float", value: 24 }`
///
/// # Returns
/// The applied value, whether it was clamped, and the derived parameters
#[wasm_bindgen]
pub fn scene_set(scene_id: u32, name: &str, value: JsValue) -> Result<JsValue, JsError> {
    let value: ParamValue = from_js(value)?;
    with_scene(scene_id, |scene| {
        let outcome = scene
            .set(name, value)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&EditReport {
            name: outcome.name,
            applied: outcome.applied,
            clamped: outcome.clamped,
            derived: outcome.derived,
        })
    })
}

/// Shorthand for float parameters; returns the applied value.
#[wasm_bindgen]
pub fn scene_set_float(scene_id: u32, name: &str, value: f64) -> Result<f64, JsError> {
    with_scene(scene_id, |scene| {
        let outcome = scene
            .set(name, value)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(outcome.applied.as_float().unwrap_or(value))
    })
}

/// The complete parameter set.
#[wasm_bindgen]
pub fn scene_snapshot(scene_id: u32) -> Result<JsValue, JsError> {
    with_scene(scene_id, |scene| to_js(scene.snapshot()))
}

/// Per-frame update of the shader clock and shell spin.
///
/// # Arguments
/// * `elapsed_seconds` - Time since the scene started
#[wasm_bindgen]
pub fn scene_advance_frame(scene_id: u32, elapsed_seconds: f64) -> Result<(), JsError> {
    with_scene(scene_id, |scene| {
        scene.advance_frame(elapsed_seconds);
        Ok(())
    })
}

/// Drain the work queued for the renderer and edit UI.
#[wasm_bindgen]
pub fn scene_take_updates(scene_id: u32) -> Result<JsValue, JsError> {
    with_scene(scene_id, |scene| to_js(&drain_updates(scene)))
}

pub(crate) fn drain_updates(scene: &mut WasmScene) -> RenderUpdates {
    let mut updates = std::mem::take(&mut scene.render_mut().0);
    updates.refresh_display = std::mem::take(&mut scene.edit_mut().refresh);
    updates
}
