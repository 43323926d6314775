use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::types::{GeoFeature, Model, PredictionRecord};

use super::normalize;

/// Keep the records of `model` that carry no error and have a year, in input order.
pub fn filter_valid(records: &[PredictionRecord], model: Model) -> Vec<&PredictionRecord> {
    records.iter()
        .filter(|r| r.is_model(model) && !r.has_error() && r.year.is_some())
        .collect()
}

/// Find the prediction of `model` for a district, matching names without regard
/// to case, accents, or surrounding whitespace.
///
/// Records flagged with an error are skipped; a missing year does not disqualify a
/// record here. When several records qualify, the first one in input order wins.
pub fn find_match<'a>(records: &'a [PredictionRecord], district: &str, model: Model) -> Option<&'a PredictionRecord> {
    let target = normalize(district);
    records.iter().find(|r| r.is_model(model) && !r.has_error() && normalize(&r.comuna) == target)
}

/// Per-feature join result, keyed by the raw feature name.
///
/// Entries keep the order in which names first appeared. A repeated feature name
/// overwrites the earlier value in place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrossJoin<'a> {
    entries: Vec<(String, Option<&'a PredictionRecord>)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl<'a> CrossJoin<'a> {
    /// Insert or overwrite the value for `name`.
    pub fn insert(&mut self, name: String, record: Option<&'a PredictionRecord>) {
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = record,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, record));
            }
        }
    }

    /// Look up a raw feature name. The outer `None` means the name was never joined.
    pub fn get(&self, name: &str) -> Option<Option<&'a PredictionRecord>> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    /// Get the number of distinct feature names.
    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    /// Check if no feature was joined.
    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Get the number of names that resolved to a prediction.
    #[inline] pub fn matched(&self) -> usize { self.entries.iter().filter(|(_, r)| r.is_some()).count() }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&'a PredictionRecord>)> + '_ {
        self.entries.iter().map(|(name, record)| (name.as_str(), *record))
    }
}

/// Resolve the prediction of `model` for every feature, keyed by the feature's raw name.
pub fn cross_join<'a>(features: &[GeoFeature], records: &'a [PredictionRecord], model: Model) -> CrossJoin<'a> {
    let mut joined = CrossJoin::default();
    for feature in features {
        joined.insert(feature.name.clone(), find_match(records, &feature.name, model));
    }
    debug!("[cross_join] model={} features={} matched={}", model, joined.len(), joined.matched());
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Geometry;

    fn record(comuna: &str, model: &str, year: Option<i32>, error: Option<&str>) -> PredictionRecord {
        PredictionRecord {
            comuna: comuna.into(),
            model: model.into(),
            year,
            error: error.map(String::from),
            ..Default::default()
        }
    }

    fn feature(name: &str) -> GeoFeature {
        GeoFeature::new(name, Geometry::Polygon(vec![vec![[-70.6, -33.4]]]))
    }

    #[test]
    fn filter_valid_membership() {
        let records = vec![
            record("Renca", "lineal", Some(2023), None),
            record("Renca", "random_forest", Some(2023), None),
            record("Quilicura", "lineal", None, None),
            record("Lampa", "lineal", Some(2023), Some("fit failed")),
            record("Colina", "linear", Some(2022), None),
        ];

        let valid = filter_valid(&records, Model::Linear);
        let names: Vec<_> = valid.iter().map(|r| r.comuna.as_str()).collect();
        assert_eq!(names, vec!["Renca", "Colina"]);

        for r in &records {
            let expected = r.is_model(Model::Linear) && r.error.is_none() && r.year.is_some();
            assert_eq!(valid.iter().any(|v| std::ptr::eq(*v, r)), expected);
        }
    }

    #[test]
    fn find_match_ignores_accents_case_and_whitespace() {
        let records = vec![record("Peñalolén", "lineal", Some(2023), None)];
        assert!(find_match(&records, "  PENALOLEN ", Model::Linear).is_some());
        assert!(find_match(&records, "Peñalolén", Model::RandomForest).is_none());
    }

    #[test]
    fn find_match_returns_first_qualifying_record() {
        let records = vec![
            record("Ñuñoa", "lineal", Some(2023), Some("fit failed")),
            record("Ñuñoa", "random_forest", Some(2023), None),
            record("nunoa", "lineal", Some(2022), None),
            record("Ñuñoa", "lineal", Some(2023), None),
        ];

        let found = find_match(&records, "Ñuñoa", Model::Linear).unwrap();
        assert!(std::ptr::eq(found, &records[2]));
    }

    #[test]
    fn find_match_does_not_require_year() {
        let records = vec![record("Lo Prado", "lineal", None, None)];
        assert!(find_match(&records, "lo prado", Model::Linear).is_some());
        assert!(filter_valid(&records, Model::Linear).is_empty());
    }

    #[test]
    fn find_match_is_idempotent() {
        let records = vec![
            record("Maipú", "gradient_boosting", Some(2023), None),
            record("Maipú", "gradient_boosting", Some(2024), None),
        ];
        let first = find_match(&records, "maipu", Model::GradientBoosting);
        let second = find_match(&records, "maipu", Model::GradientBoosting);
        assert_eq!(first, second);
        assert_eq!(first.unwrap().year, Some(2023));
    }

    #[test]
    fn model_ids_must_match_exactly() {
        let records = vec![
            record("Renca", " LINEAR ", Some(2023), None),
            record("Renca", "Random_Forest", Some(2023), None),
        ];
        assert!(filter_valid(&records, Model::Linear).is_empty());
        assert!(find_match(&records, "Renca", Model::Linear).is_none());
        assert!(filter_valid(&records, Model::RandomForest).is_empty());
        assert!(find_match(&records, "Renca", Model::RandomForest).is_none());
    }

    #[test]
    fn find_match_on_empty_input() {
        assert!(find_match(&[], "Renca", Model::Linear).is_none());
    }

    #[test]
    fn cross_join_preserves_feature_order() {
        let records = vec![
            record("Santiago", "lineal", Some(2023), None),
            record("Providencia", "lineal", Some(2023), None),
        ];
        let features = vec![feature("Providencia"), feature("Vitacura"), feature("Santiago")];

        let joined = cross_join(&features, &records, Model::Linear);
        let names: Vec<_> = joined.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Providencia", "Vitacura", "Santiago"]);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.matched(), 2);
        assert_eq!(joined.get("Vitacura"), Some(None));
        assert_eq!(joined.get("Las Condes"), None);
    }

    #[test]
    fn cross_join_last_write_wins_in_place() {
        let records = vec![record("Santiago", "lineal", Some(2023), None)];
        let features = vec![feature("Santiago"), feature("Renca"), feature("Santiago")];

        let mut joined = cross_join(&features, &records, Model::Linear);
        assert_eq!(joined.len(), 2);

        joined.insert("Santiago".into(), None);
        let entries: Vec<_> = joined.iter().collect();
        assert_eq!(entries, vec![("Santiago", None), ("Renca", None)]);
    }

    #[test]
    fn cross_join_keys_are_raw_names() {
        let records = vec![record("Ñuñoa", "lineal", Some(2023), None)];
        let features = vec![feature(" ÑUÑOA ")];

        let joined = cross_join(&features, &records, Model::Linear);
        assert!(joined.get(" ÑUÑOA ").unwrap().is_some());
        assert_eq!(joined.get("Ñuñoa"), None);
    }
}
