#[allow(clippy::module_inception)]
mod join;
mod name;
mod stats;

pub use join::{cross_join, filter_valid, find_match, CrossJoin};
pub use name::{normalize, same_name};
pub use stats::{compute_stats, ModelStats};
