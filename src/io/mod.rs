//! IO module for loading the two input datasets.
//!
//! # Formats
//!
//! - `geojson` - district features from a GeoJSON FeatureCollection
//! - `predictions` - prediction records from a JSON array or a CSV table (requires `csv` feature)
//!
//! The core modules never parse files themselves; they only see the in-memory
//! types produced here.

mod geojson;
mod predictions;

use serde::{Deserialize, Serialize};

pub use geojson::{parse_features_geojson, read_features_geojson};
pub use predictions::{parse_predictions_json, read_predictions, read_predictions_csv, read_predictions_json};

/// GeoJSON property holding the comuna name in the regional boundaries dataset.
pub const DEFAULT_NAME_PROPERTY: &str = "Comuna";

/// Options controlling how features are loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Feature property holding the district name.
    pub name_property: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { name_property: DEFAULT_NAME_PROPERTY.to_string() }
    }
}
