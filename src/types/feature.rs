use geo::{LineString, MultiPolygon, Polygon};

/// A `[longitude, latitude]` position, in GeoJSON order.
pub type Position = [f64; 2];

/// A closed ring of positions. The first ring of a polygon is its exterior.
pub type Ring = Vec<Position>;

/// Polygonal geometry of a district.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
    /// Any other GeoJSON geometry type, kept by name so consumers can reject it.
    Unsupported(String),
}

impl Geometry {
    /// GeoJSON type name of the geometry.
    pub fn kind(&self) -> &str {
        match self {
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::Unsupported(kind) => kind,
        }
    }

    /// Convert to a `geo` MultiPolygon, holes included.
    /// Polygons without rings are dropped; unsupported geometries yield `None`.
    pub fn to_multi_polygon(&self) -> Option<MultiPolygon<f64>> {
        let polygons = match self {
            Geometry::Polygon(rings) => to_polygon(rings).into_iter().collect(),
            Geometry::MultiPolygon(polygons) => polygons.iter().filter_map(|p| to_polygon(p)).collect(),
            Geometry::Unsupported(_) => return None,
        };
        Some(MultiPolygon(polygons))
    }
}

fn to_polygon(rings: &[Ring]) -> Option<Polygon<f64>> {
    let (exterior, interiors) = rings.split_first()?;
    Some(Polygon::new(
        LineString::from(exterior.clone()),
        interiors.iter().map(|ring| LineString::from(ring.clone())).collect(),
    ))
}

/// A named district polygon from the geographic dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    pub name: String, // Free text, as entered in the source dataset
    pub geometry: Geometry,
}

impl GeoFeature {
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self { name: name.into(), geometry }
    }
}
