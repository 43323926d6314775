use serde::Serialize;

use crate::encode::{category_for, color_for, format_number, format_z, Category, Rgb};
use crate::types::{Model, PredictionRecord};

/// One predicted quantity with its display encodings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub value: Option<f64>,
    pub formatted: String,
    pub z: Option<f64>,
    pub z_formatted: String,
    pub category: Category,
    pub color: Rgb,
}

impl Reading {
    pub fn new(value: Option<f64>, z: Option<f64>) -> Self {
        Self {
            value,
            formatted: format_number(value),
            z,
            z_formatted: format_z(z),
            category: category_for(z),
            color: color_for(z),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSign {
    Positive,   // balance >= 0
    Negative,
}

/// Migratory balance: immigration minus emigration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balance {
    pub value: f64,
    pub formatted: String,
    pub sign: BalanceSign,
}

impl Balance {
    pub fn of(record: &PredictionRecord) -> Self {
        let value = record.balance();
        Self {
            value,
            formatted: format_number(Some(value)),
            sign: if value >= 0.0 { BalanceSign::Positive } else { BalanceSign::Negative },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSummary {
    pub year: Option<i32>,
    pub emigration: Reading,
    pub immigration: Reading,
    pub balance: Balance,
}

/// Everything an info panel shows for one comuna under one model.
/// `prediction` is `None` when the comuna has no usable record for the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictSummary {
    pub name: String,
    pub model: Model,
    pub model_label: &'static str,
    pub prediction: Option<PredictionSummary>,
}

impl DistrictSummary {
    pub fn new(name: impl Into<String>, model: Model, record: Option<&PredictionRecord>) -> Self {
        Self {
            name: name.into(),
            model,
            model_label: model.label(),
            prediction: record.map(|r| PredictionSummary {
                year: r.year,
                emigration: Reading::new(r.emigration_pred, r.emigration_pred_z),
                immigration: Reading::new(r.immigration_pred, r.immigration_pred_z),
                balance: Balance::of(r),
            }),
        }
    }
}
