use wasm_bindgen::prelude::*;

mod atlas;
mod common;

pub use atlas::WasmAtlas;

use common::*;

/// Called automatically when the WASM module is instantiated.
/// Sets up panic hook so Rust panics appear as console.error in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Comparison key of a comuna name (lowercase, no accents, trimmed).
#[wasm_bindgen]
pub fn normalize(name: &str) -> String {
    migramap_core::normalize(name)
}

/// CSS fill for a z-score, e.g. "rgb(255,43,43)". Missing scores are gray.
#[wasm_bindgen(js_name = "color_for")]
pub fn color_for(z: Option<f64>) -> String {
    migramap_core::color_for(z).to_string()
}

/// Category of a z-score as { label, tag }.
#[wasm_bindgen(js_name = "category_for")]
pub fn category_for(z: Option<f64>) -> Result<JsValue, JsValue> {
    to_js(&migramap_core::category_for(z))
}

/// Signed, es-CL grouped integer, or "N/A".
#[wasm_bindgen(js_name = "format_number")]
pub fn format_number(value: Option<f64>) -> String {
    migramap_core::format_number(value)
}

/// Selectable models as [{ id, label }].
#[wasm_bindgen]
pub fn models() -> Result<JsValue, JsValue> {
    let models: Vec<_> = migramap_core::Model::ALL.iter()
        .map(|m| ModelOption { id: m.id(), label: m.label() })
        .collect();
    to_js(&models)
}
