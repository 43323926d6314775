#![doc = "migramap public API"]
mod atlas;
pub mod encode;
pub mod geom;
pub mod io;
pub mod join;
mod types;
pub mod view;

#[doc(inline)]
pub use atlas::Atlas;

#[doc(inline)]
pub use types::{GeoFeature, Geometry, Model, Position, PredictionRecord, Ring};

#[doc(inline)]
pub use encode::{category_for, color_for, format_number, Category, Rgb};

#[doc(inline)]
pub use geom::{compute_bounds, BoundingBox};

#[doc(inline)]
pub use join::{compute_stats, cross_join, filter_valid, find_match, normalize, CrossJoin, ModelStats};
