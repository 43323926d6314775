//! View models consumed by a map front end.

mod selection;
mod summary;

pub use selection::{FeatureStyle, Selection};
pub use summary::{Balance, BalanceSign, DistrictSummary, PredictionSummary, Reading};
