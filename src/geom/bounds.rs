use anyhow::{anyhow, bail, Result};
use geo::{Coord, Rect};
use serde::Serialize;

use crate::types::{GeoFeature, Geometry, Ring};

/// Latitude/longitude rectangle enclosing a set of districts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Degenerate box around a single point.
    pub fn point(lat: f64, lng: f64) -> Self {
        Self { min_lat: lat, min_lng: lng, max_lat: lat, max_lng: lng }
    }

    /// Grow the box to include a point.
    pub fn include(&mut self, lat: f64, lng: f64) {
        self.min_lat = self.min_lat.min(lat);
        self.min_lng = self.min_lng.min(lng);
        self.max_lat = self.max_lat.max(lat);
        self.max_lng = self.max_lng.max(lng);
    }

    /// Box enlarged by `degrees` on every side.
    pub fn padded(&self, degrees: f64) -> Self {
        Self {
            min_lat: self.min_lat - degrees,
            min_lng: self.min_lng - degrees,
            max_lat: self.max_lat + degrees,
            max_lng: self.max_lng + degrees,
        }
    }

    /// Center as (lat, lng).
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        ((self.min_lat + self.max_lat) / 2.0, (self.min_lng + self.max_lng) / 2.0)
    }

    /// Corners as [[min_lat, min_lng], [max_lat, max_lng]], the order map viewports expect.
    #[inline]
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [[self.min_lat, self.min_lng], [self.max_lat, self.max_lng]]
    }

    /// Convert to a `geo` rectangle with x = longitude, y = latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord { x: self.min_lng, y: self.min_lat },
            Coord { x: self.max_lng, y: self.max_lat },
        )
    }
}

/// Compute the rectangle enclosing the exterior rings of all features.
///
/// Only the first ring of each polygon is scanned, so holes never widen the box.
/// Returns `Ok(None)` when there are no points. A feature with a non-polygonal
/// geometry, or a polygon without any ring, is rejected.
pub fn compute_bounds(features: &[GeoFeature]) -> Result<Option<BoundingBox>> {
    let mut bounds: Option<BoundingBox> = None;

    for feature in features {
        for ring in exterior_rings(feature)? {
            // Positions are [lng, lat].
            for &[lng, lat] in ring {
                match bounds.as_mut() {
                    Some(b) => b.include(lat, lng),
                    None => bounds = Some(BoundingBox::point(lat, lng)),
                }
            }
        }
    }

    Ok(bounds)
}

/// Get the exterior ring of every polygon in a feature.
fn exterior_rings(feature: &GeoFeature) -> Result<Vec<&Ring>> {
    let missing = || anyhow!("[compute_bounds] Feature {:?} has a polygon without rings", feature.name);
    match &feature.geometry {
        Geometry::Polygon(rings) => Ok(vec![rings.first().ok_or_else(missing)?]),
        Geometry::MultiPolygon(polygons) => polygons.iter()
            .map(|rings| rings.first().ok_or_else(missing))
            .collect(),
        Geometry::Unsupported(kind) => {
            bail!("[compute_bounds] Feature {:?} has unsupported geometry type {:?}", feature.name, kind)
        }
    }
}
