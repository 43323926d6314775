use geo::{BoundingRect, Contains, MultiPolygon, Point, Rect};
use rstar::{RTree, RTreeObject, AABB};
use tracing::warn;

use crate::types::GeoFeature;

/// A bounding rectangle in an R-tree, associated with a feature by index.
#[derive(Debug, Clone)]
struct IndexedRect {
    idx: usize, // Index of the corresponding feature
    rect: Rect<f64>,
}

impl RTreeObject for IndexedRect {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.rect.min().into(), self.rect.max().into())
    }
}

/// Point-in-district lookup over a feature collection.
#[derive(Debug, Clone)]
pub struct DistrictIndex {
    shapes: Vec<Option<MultiPolygon<f64>>>,
    rtree: RTree<IndexedRect>,
}

impl DistrictIndex {
    /// Build the index. Features without polygonal area are kept as empty slots.
    pub fn new(features: &[GeoFeature]) -> Self {
        let shapes: Vec<_> = features.iter()
            .map(|f| f.geometry.to_multi_polygon())
            .collect();

        let rects = shapes.iter().enumerate()
            .filter_map(|(idx, shape)| {
                let rect = shape.as_ref().and_then(|mp| mp.bounding_rect());
                if rect.is_none() { warn!("[DistrictIndex] feature {} has no polygonal area", features[idx].name) }
                rect.map(|rect| IndexedRect { idx, rect })
            })
            .collect();

        Self { shapes, rtree: RTree::bulk_load(rects) }
    }

    /// Get the number of indexed features, including empty slots.
    #[inline] pub fn len(&self) -> usize { self.shapes.len() }

    /// Check if the index holds no features.
    #[inline] pub fn is_empty(&self) -> bool { self.shapes.is_empty() }

    /// Find the feature whose polygon contains the point. Holes are respected.
    /// If polygons overlap, the lowest feature index wins.
    pub fn locate(&self, lat: f64, lng: f64) -> Option<usize> {
        let point = Point::new(lng, lat);
        self.rtree.locate_in_envelope_intersecting(&AABB::from_point([lng, lat]))
            .filter(|entry| self.shapes[entry.idx].as_ref().is_some_and(|mp| mp.contains(&point)))
            .map(|entry| entry.idx)
            .min()
    }
}
