use serde::Serialize;

use crate::types::{Model, PredictionRecord};

use super::filter_valid;

/// Range of predicted values for one model.
/// A statistic is `None` when no valid record carries the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ModelStats {
    pub max_emigration: Option<f64>,
    pub min_emigration: Option<f64>,
    pub max_immigration: Option<f64>,
    pub min_immigration: Option<f64>,
}

/// Compute min/max emigration and immigration over the valid records of `model`.
pub fn compute_stats(records: &[PredictionRecord], model: Model) -> ModelStats {
    let valid = filter_valid(records, model);
    let (min_emigration, max_emigration) = min_max(valid.iter().filter_map(|r| r.emigration_pred));
    let (min_immigration, max_immigration) = min_max(valid.iter().filter_map(|r| r.immigration_pred));
    ModelStats { max_emigration, min_emigration, max_immigration, min_immigration }
}

fn min_max(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    values.fold((None::<f64>, None::<f64>), |(lo, hi), v| {
        (Some(lo.map_or(v, |lo| lo.min(v))), Some(hi.map_or(v, |hi| hi.max(v))))
    })
}
