use serde::Serialize;
use wasm_bindgen::JsValue;

use migramap_core::Model;

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Convert to a plain JS value (objects, not `Map`s).
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.into())
}

/// Parse a model id coming from a `<select>`. Unknown ids are `None` and match nothing.
pub(crate) fn parse_model(model: &str) -> Option<Model> {
    Model::parse(model)
}

#[derive(Serialize)]
pub(crate) struct ModelOption {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
}
