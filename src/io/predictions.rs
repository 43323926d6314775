use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::types::PredictionRecord;

/// Read prediction records from a JSON array file.
pub fn read_predictions_json(path: &Path) -> Result<Vec<PredictionRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read predictions file: {}", path.display()))?;
    parse_predictions_json(&text)
        .with_context(|| format!("Failed to parse predictions file: {}", path.display()))
}

/// Parse prediction records from JSON text (an array of objects).
pub fn parse_predictions_json(text: &str) -> Result<Vec<PredictionRecord>> {
    let records: Vec<PredictionRecord> = serde_json::from_str(text)
        .context("[parse_predictions_json] Expected an array of prediction records")?;
    log_summary(&records);
    Ok(records)
}

/// Read predictions from a file, choosing the format by extension (`.csv` or JSON).
pub fn read_predictions(path: &Path) -> Result<Vec<PredictionRecord>> {
    let is_csv = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv { read_predictions_csv(path) } else { read_predictions_json(path) }
}

#[cfg(feature = "csv")]
pub use csv::read_predictions_csv;

#[cfg(not(feature = "csv"))]
pub fn read_predictions_csv(path: &Path) -> Result<Vec<PredictionRecord>> {
    anyhow::bail!("[read_predictions_csv] CSV support is disabled, cannot read {}", path.display())
}

fn log_summary(records: &[PredictionRecord]) {
    let failed = records.iter().filter(|r| r.has_error()).count();
    debug!("[predictions] loaded {} records", records.len());
    if failed > 0 { debug!("[predictions] {} of {} records carry an error and will never match", failed, records.len()) }
}

#[cfg(feature = "csv")]
mod csv {
    use std::{fs::File, path::Path};

    use anyhow::{anyhow, Context, Result};
    use polars::prelude::{Column, CsvReader, DataFrame, DataType, SerReader};

    use crate::types::PredictionRecord;

    /// Read prediction records from a CSV table with a header row.
    ///
    /// `comuna` and `modelo` (or `model`) are required; the remaining columns are
    /// optional and accept the same Spanish/English names as the JSON form.
    pub fn read_predictions_csv(path: &Path) -> Result<Vec<PredictionRecord>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open predictions CSV: {}", path.display()))?;
        let df = CsvReader::new(file)
            .finish()
            .with_context(|| format!("Failed to parse predictions CSV: {}", path.display()))?;
        let records = records_from_frame(&df)?;
        super::log_summary(&records);
        Ok(records)
    }

    /// Find the first present column among `names`.
    fn column<'a>(df: &'a DataFrame, names: &[&str]) -> Option<&'a Column> {
        names.iter().find_map(|name| df.column(name).ok())
    }

    fn strings(df: &DataFrame, names: &[&str]) -> Result<Option<Vec<Option<String>>>> {
        let Some(col) = column(df, names) else { return Ok(None) };
        let col = col.cast(&DataType::String)?;
        Ok(Some(col.str()?.into_iter().map(|v| v.map(String::from)).collect()))
    }

    fn floats(df: &DataFrame, names: &[&str]) -> Result<Vec<Option<f64>>> {
        let Some(col) = column(df, names) else { return Ok(vec![None; df.height()]) };
        let col = col.cast(&DataType::Float64)?;
        Ok(col.f64()?.into_iter().collect())
    }

    fn ints(df: &DataFrame, names: &[&str]) -> Result<Vec<Option<i32>>> {
        let Some(col) = column(df, names) else { return Ok(vec![None; df.height()]) };
        let col = col.cast(&DataType::Int64)?;
        Ok(col.i64()?.into_iter().map(|v| v.and_then(|v| i32::try_from(v).ok())).collect())
    }

    pub(super) fn records_from_frame(df: &DataFrame) -> Result<Vec<PredictionRecord>> {
        let comunas = strings(df, &["comuna"])?
            .ok_or_else(|| anyhow!("[read_predictions_csv] Missing required column \"comuna\""))?;
        let models = strings(df, &["modelo", "model"])?
            .ok_or_else(|| anyhow!("[read_predictions_csv] Missing required column \"modelo\""))?;
        let years = ints(df, &["año", "anio", "year"])?;
        let emigration = floats(df, &["emigracion_pred", "emigration_pred"])?;
        let emigration_z = floats(df, &["emigracion_pred_z", "emigration_pred_z"])?;
        let immigration = floats(df, &["inmigracion_pred", "immigration_pred"])?;
        let immigration_z = floats(df, &["inmigracion_pred_z", "immigration_pred_z"])?;
        let errors = strings(df, &["error"])?.unwrap_or_else(|| vec![None; df.height()]);

        (0..df.height())
            .map(|i| {
                let comuna = comunas[i].clone()
                    .ok_or_else(|| anyhow!("[read_predictions_csv] Row {} has no comuna", i))?;
                let model = models[i].clone()
                    .ok_or_else(|| anyhow!("[read_predictions_csv] Row {} has no model", i))?;
                Ok(PredictionRecord {
                    comuna,
                    year: years[i],
                    model,
                    emigration_pred: emigration[i],
                    emigration_pred_z: emigration_z[i],
                    immigration_pred: immigration[i],
                    immigration_pred_z: immigration_z[i],
                    error: errors[i].clone(),
                })
            })
            .collect()
    }
}
