//! Stateless queries: object types, parameter names, presets, one-shot synthesis

use celestial_forge::{ForgeConfig, synthesize};
use celestial_params::{ParameterSet, registry};
use celestial_presets::{PRESETS, preset_named};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use wasm_bindgen::prelude::*;

use crate::to_js;

/// Display names of every object type, in menu order.
#[wasm_bindgen]
pub fn object_types() -> Result<JsValue, JsError> {
    let names: Vec<&str> = celestial_forge::object_types().collect();
    to_js(&names)
}

/// Canonical names of every editable or readable parameter.
#[wasm_bindgen]
pub fn parameter_names() -> Result<JsValue, JsError> {
    let names: Vec<&str> = registry::names().collect();
    to_js(&names)
}

/// The full preset table, for UIs that show the sampled ranges.
#[wasm_bindgen]
pub fn presets() -> Result<JsValue, JsError> {
    to_js(&PRESETS)
}

/// Synthesize a body from scene-load defaults without creating a scene.
///
/// # Arguments
/// * `object_type` - Display name, e.g. "Gas Planet"
/// * `seed` - Random seed for reproducible generation
#[wasm_bindgen]
pub fn synthesize_body(object_type: &str, seed: u64) -> Result<JsValue, JsError> {
    let preset = preset_named(object_type)
        .ok_or_else(|| JsError::new(&format!("Unknown object type: {}", object_type)))?;
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let params = synthesize(
        preset,
        &ParameterSet::default(),
        &ForgeConfig::default(),
        &mut rng,
    );
    to_js(&params)
}
