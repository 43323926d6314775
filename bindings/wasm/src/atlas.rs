use anyhow::Result;
use serde::Serialize;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use migramap_core::io::{parse_features_geojson, parse_predictions_json, LoadOptions};
use migramap_core::view::{DistrictSummary, PredictionSummary};
use migramap_core::Atlas;

use crate::common::*;

/// Join result for one district, as handed to the map layer.
#[derive(Serialize)]
struct Entry {
    name: String,
    prediction: Option<PredictionSummary>,
}

impl Entry {
    fn new(name: &str, summary: Option<DistrictSummary>) -> Self {
        Self { name: name.to_string(), prediction: summary.and_then(|s| s.prediction) }
    }
}

#[wasm_bindgen]
pub struct WasmAtlas {
    inner: Atlas,
}

#[wasm_bindgen]
impl WasmAtlas {
    /// Construct an Atlas from GeoJSON text and a JSON array of predictions.
    /// name_property: feature property holding the comuna name, defaults to "Comuna".
    #[wasm_bindgen(constructor)]
    pub fn new(geojson: &str, predictions: &str, name_property: Option<String>) -> Result<WasmAtlas, JsValue> {
        let inner = load(geojson, predictions, name_property).map_err(js_err)?;
        Ok(WasmAtlas { inner })
    }

    /// Number of district features.
    pub fn len(&self) -> usize { self.inner.features().len() }

    /// Viewport bounds as [[min_lat, min_lng], [max_lat, max_lng]], or null if there are no coordinates.
    pub fn bounds(&self) -> Result<JsValue, JsValue> {
        let bounds = self.inner.bounds().map_err(js_err)?;
        to_js(&bounds.map(|b| b.corners()))
    }

    /// One entry per feature: { name, prediction }, prediction null when unmatched.
    pub fn join(&self, model: &str) -> Result<JsValue, JsValue> {
        let entries: Vec<Entry> = match parse_model(model) {
            Some(model) => self.inner.join(model).iter()
                .map(|(name, record)| Entry::new(name, Some(DistrictSummary::new(name, model, record))))
                .collect(),
            None => self.inner.features().iter().map(|f| Entry::new(&f.name, None)).collect(),
        };
        to_js(&entries)
    }

    /// Info-panel contents for one comuna: { name, prediction }.
    pub fn summary(&self, name: &str, model: &str) -> Result<JsValue, JsValue> {
        let summary = parse_model(model).map(|model| self.inner.summary(name, model));
        to_js(&Entry::new(name, summary))
    }

    /// Prediction ranges of a model; every field is null for unknown models.
    pub fn stats(&self, model: &str) -> Result<JsValue, JsValue> {
        let stats = parse_model(model).map(|m| self.inner.stats(m)).unwrap_or_default();
        to_js(&stats)
    }

    /// Name of the comuna containing the point, or undefined.
    #[wasm_bindgen(js_name = "district_at")]
    pub fn district_at(&self, lat: f64, lng: f64) -> Option<String> {
        self.inner.district_at(lat, lng).map(|f| f.name.clone())
    }
}

fn load(geojson: &str, predictions: &str, name_property: Option<String>) -> Result<Atlas> {
    let mut options = LoadOptions::default();
    if let Some(name_property) = name_property { options.name_property = name_property }
    Ok(Atlas::new(parse_features_geojson(geojson, &options)?, parse_predictions_json(predictions)?))
}
