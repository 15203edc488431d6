//! WASM bindings for celestial body synthesis.
//!
//! Exposes the object-type catalogue, stateless synthesis, and long-lived
//! scenes that a browser UI can randomize and edit parameter by parameter.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, {
//!     object_types,
//!     scene_create,
//!     scene_randomize,
//!     scene_regenerate,
//!     scene_set,
//!     scene_snapshot,
//!     scene_take_updates,
//! } from 'celestial-wasm';
//!
//! await init();
//!
//! const seed = () => BigInt(Math.floor(Math.random() * 2 ** 32));
//!
//! // A Star is generated on load
//! const id = scene_create(seed());
//! scene_randomize(id, object_types()[5], seed());
//!
//! // "Generate" re-rolls the current selection
//! scene_regenerate(id, seed());
//!
//! // Manual edits use tagged values
//! scene_set(id, 'planet.radius', { kind: 'float', value: 24 });
//!
//! // Once per frame: apply what changed, then read the parameters
//! const updates = scene_take_updates(id);
//! if (updates.rebuildAtmosphere) rebuildShell(scene_snapshot(id));
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

mod catalogue;
mod scene;


pub use catalogue::*;
pub use scene::*;

#[wasm_bindgen(typescript_custom_section)]
const TS_PARAM_TYPES: &'static str = r#"
/** Tagged parameter value accepted by scene_set */
export type ParamValue =
    | { kind: "float"; value: number }
    | { kind: "int"; value: number }
    | { kind: "color"; value: Rgb }
    | { kind: "vector"; value: [number, number, number] }
    | { kind: "axis"; value: Axis }
    | { kind: "shape"; value: ShapeType }
    | { kind: "flag"; value: boolean };
"#;

// =============================================================================
// Serialization helpers
// =============================================================================

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

pub(crate) fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
