use serde::{de::Error, Deserialize, Deserializer, Serialize};

use super::Model;

/// One row of model output for a comuna.
///
/// Field names follow the English schema; the Spanish keys used by the
/// published prediction tables are accepted as aliases when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub comuna: String,
    #[serde(default, alias = "año", alias = "anio", deserialize_with = "de_year")]
    pub year: Option<i32>,
    #[serde(alias = "modelo")]
    pub model: String,
    #[serde(default, alias = "emigracion_pred")]
    pub emigration_pred: Option<f64>,
    #[serde(default, alias = "emigracion_pred_z")]
    pub emigration_pred_z: Option<f64>,
    #[serde(default, alias = "inmigracion_pred")]
    pub immigration_pred: Option<f64>,
    #[serde(default, alias = "inmigracion_pred_z")]
    pub immigration_pred_z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Years exported as `2023.0` are accepted; fractional years are rejected.
fn de_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(y) if y.fract() == 0.0 && y >= i32::MIN as f64 && y <= i32::MAX as f64 => Ok(Some(y as i32)),
        Some(y) => Err(D::Error::custom(format!("invalid year {y}"))),
    }
}

impl PredictionRecord {
    /// Convenience constructor for a record without numeric fields.
    pub fn new(comuna: impl Into<String>, model: impl Into<String>) -> Self {
        Self { comuna: comuna.into(), model: model.into(), ..Default::default() }
    }

    /// Check whether the record was produced by `model`. Ids are compared verbatim.
    #[inline] pub fn is_model(&self, model: Model) -> bool { model.is_id(&self.model) }

    /// Check whether upstream flagged the record as failed. An empty message counts as no error.
    #[inline] pub fn has_error(&self) -> bool { self.error.as_deref().is_some_and(|e| !e.is_empty()) }

    /// Migratory balance, immigration minus emigration, with absent fields counted as zero.
    #[inline]
    pub fn balance(&self) -> f64 {
        self.immigration_pred.unwrap_or(0.0) - self.emigration_pred.unwrap_or(0.0)
    }
}
