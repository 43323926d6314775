mod feature;
mod model;
mod record;

pub use feature::{GeoFeature, Geometry, Position, Ring};
pub use model::Model;
pub use record::PredictionRecord;
