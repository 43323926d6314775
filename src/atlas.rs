use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::geom::{compute_bounds, BoundingBox, DistrictIndex};
use crate::io::{read_features_geojson, read_predictions, LoadOptions};
use crate::join::{compute_stats, cross_join, find_match, CrossJoin, ModelStats};
use crate::types::{GeoFeature, Model, PredictionRecord};
use crate::view::DistrictSummary;

/// A loaded dataset: district features, prediction records, and a spatial index.
#[derive(Debug, Clone)]
pub struct Atlas {
    features: Vec<GeoFeature>,
    records: Vec<PredictionRecord>,
    index: DistrictIndex,
}

impl Atlas {
    pub fn new(features: Vec<GeoFeature>, records: Vec<PredictionRecord>) -> Self {
        let index = DistrictIndex::new(&features);
        debug!("[Atlas::new] {} features, {} records", features.len(), records.len());
        Self { features, records, index }
    }

    /// Load features from GeoJSON and predictions from JSON or CSV.
    pub fn read(features: &Path, predictions: &Path, options: &LoadOptions) -> Result<Self> {
        Ok(Self::new(read_features_geojson(features, options)?, read_predictions(predictions)?))
    }

    #[inline] pub fn features(&self) -> &[GeoFeature] { &self.features }
    #[inline] pub fn records(&self) -> &[PredictionRecord] { &self.records }

    /// Viewport enclosing all districts.
    pub fn bounds(&self) -> Result<Option<BoundingBox>> {
        compute_bounds(&self.features)
    }

    /// Prediction of every district for `model`, in feature order.
    pub fn join(&self, model: Model) -> CrossJoin<'_> {
        let joined = cross_join(&self.features, &self.records, model);
        let unmatched = joined.len() - joined.matched();
        if unmatched > 0 { info!("[Atlas::join] {} of {} districts have no {} prediction", unmatched, joined.len(), model) }
        joined
    }

    pub fn stats(&self, model: Model) -> ModelStats {
        compute_stats(&self.records, model)
    }

    pub fn lookup(&self, name: &str, model: Model) -> Option<&PredictionRecord> {
        find_match(&self.records, name, model)
    }

    pub fn summary(&self, name: &str, model: Model) -> DistrictSummary {
        DistrictSummary::new(name, model, self.lookup(name, model))
    }

    /// Feature containing the point, if any.
    pub fn district_at(&self, lat: f64, lng: f64) -> Option<&GeoFeature> {
        self.index.locate(lat, lng).map(|i| &self.features[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Geometry;

    fn make_atlas() -> Atlas {
        let features = vec![
            GeoFeature::new("Santiago", Geometry::Polygon(vec![
                vec![[-70.70, -33.47], [-70.62, -33.47], [-70.62, -33.42], [-70.70, -33.42], [-70.70, -33.47]],
            ])),
            GeoFeature::new("Ñuñoa", Geometry::Polygon(vec![
                vec![[-70.62, -33.47], [-70.56, -33.47], [-70.56, -33.44], [-70.62, -33.44], [-70.62, -33.47]],
            ])),
        ];
        let records = vec![
            PredictionRecord {
                year: Some(2023),
                immigration_pred: Some(1000.0),
                ..PredictionRecord::new("santiago", "lineal")
            },
            PredictionRecord {
                year: Some(2023),
                immigration_pred: Some(3000.0),
                ..PredictionRecord::new("NUNOA", "lineal")
            },
        ];
        Atlas::new(features, records)
    }

    #[test]
    fn bounds_cover_all_features() {
        let bounds = make_atlas().bounds().unwrap().unwrap();
        assert_eq!(bounds, BoundingBox { min_lat: -33.47, min_lng: -70.70, max_lat: -33.42, max_lng: -70.56 });
    }

    #[test]
    fn join_and_stats() {
        let atlas = make_atlas();
        assert_eq!(atlas.join(Model::Linear).matched(), 2);
        assert_eq!(atlas.join(Model::RandomForest).matched(), 0);
        assert_eq!(atlas.stats(Model::Linear).max_immigration, Some(3000.0));
        assert!(atlas.lookup("Ñuñoa", Model::Linear).is_some());
        assert!(atlas.summary("Ñuñoa", Model::Linear).prediction.is_some());
    }

    #[test]
    fn picks_district_under_point() {
        let atlas = make_atlas();
        assert_eq!(atlas.district_at(-33.45, -70.60).map(|f| f.name.as_str()), Some("Ñuñoa"));
        assert_eq!(atlas.district_at(-33.45, -70.66).map(|f| f.name.as_str()), Some("Santiago"));
        assert!(atlas.district_at(-33.60, -70.60).is_none());
    }
}
