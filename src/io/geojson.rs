use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::types::{GeoFeature, Geometry, Position, Ring};

use super::LoadOptions;

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// Read district features from a GeoJSON FeatureCollection file.
pub fn read_features_geojson(path: &Path, options: &LoadOptions) -> Result<Vec<GeoFeature>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    parse_features_geojson(&text, options)
        .with_context(|| format!("Failed to parse GeoJSON file: {}", path.display()))
}

/// Parse district features from GeoJSON text.
/// The district name is read from `properties[options.name_property]`.
pub fn parse_features_geojson(text: &str, options: &LoadOptions) -> Result<Vec<GeoFeature>> {
    let collection: RawCollection = serde_json::from_str(text)?;
    if collection.kind != "FeatureCollection" {
        bail!("[parse_features_geojson] Expected a FeatureCollection, found {:?}", collection.kind);
    }

    let features = collection.features.into_iter().enumerate()
        .map(|(i, raw)| {
            let name = raw.properties.as_ref()
                .and_then(|props| props.get(&options.name_property))
                .and_then(Value::as_str)
                .with_context(|| format!(
                    "[parse_features_geojson] Feature {} has no string property {:?}", i, options.name_property
                ))?;
            let geometry = match raw.geometry {
                Some(geometry) => parse_geometry(geometry)
                    .with_context(|| format!("[parse_features_geojson] Invalid geometry for {:?}", name))?,
                None => Geometry::Unsupported("null".into()),
            };
            Ok(GeoFeature::new(name, geometry))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("[parse_features_geojson] loaded {} features", features.len());
    Ok(features)
}

fn parse_geometry(raw: RawGeometry) -> Result<Geometry> {
    Ok(match raw.kind.as_str() {
        "Polygon" => {
            let rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(raw.coordinates)?;
            Geometry::Polygon(to_rings(rings)?)
        }
        "MultiPolygon" => {
            let polygons: Vec<Vec<Vec<Vec<f64>>>> = serde_json::from_value(raw.coordinates)?;
            Geometry::MultiPolygon(polygons.into_iter().map(to_rings).collect::<Result<_>>()?)
        }
        _ => Geometry::Unsupported(raw.kind),
    })
}

/// Convert raw rings into [lng, lat] positions, dropping any altitude.
fn to_rings(rings: Vec<Vec<Vec<f64>>>) -> Result<Vec<Ring>> {
    rings.into_iter()
        .map(|ring| ring.into_iter().map(to_position).collect::<Result<Ring>>())
        .collect()
}

fn to_position(coords: Vec<f64>) -> Result<Position> {
    match coords.as_slice() {
        &[lng, lat, ..] => Ok([lng, lat]),
        _ => bail!("Position needs at least two coordinates, found {}", coords.len()),
    }
}
