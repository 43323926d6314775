mod bounds;
mod index;

pub use bounds::{compute_bounds, BoundingBox};
pub use index::DistrictIndex;
