use serde::Serialize;

use crate::encode::{color_for, Rgb};
use crate::join::find_match;
use crate::types::{Model, PredictionRecord};

use super::DistrictSummary;

/// Outline color of the selected or hovered district.
const HIGHLIGHT_OUTLINE: Rgb = Rgb { r: 26, g: 26, b: 46 };
const DEFAULT_OUTLINE: Rgb = Rgb { r: 68, g: 68, b: 68 };

/// Interactive state owned by the presentation layer: chosen model, clicked
/// district, and district under the pointer. Districts are kept by raw name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    model: Model,
    selected: Option<String>,
    hovered: Option<String>,
}

/// Drawing style of one district polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureStyle {
    pub fill: Rgb,
    pub outline: Rgb,
    pub weight: u8,
    pub fill_opacity: f64,
}

impl Selection {
    pub fn new(model: Model) -> Self {
        Self { model, ..Default::default() }
    }

    #[inline] pub fn model(&self) -> Model { self.model }
    #[inline] pub fn selected(&self) -> Option<&str> { self.selected.as_deref() }
    #[inline] pub fn hovered(&self) -> Option<&str> { self.hovered.as_deref() }

    pub fn set_model(&mut self, model: Model) { self.model = model }

    /// Select a district (click). Empty names clear the selection.
    pub fn select(&mut self, name: Option<&str>) {
        self.selected = name.filter(|n| !n.is_empty()).map(String::from);
    }

    /// Track the district under the pointer. Empty names clear it.
    pub fn hover(&mut self, name: Option<&str>) {
        self.hovered = name.filter(|n| !n.is_empty()).map(String::from);
    }

    /// District shown in the info panel: the hovered one, else the selected one.
    pub fn focused(&self) -> Option<&str> {
        self.hovered().or(self.selected())
    }

    /// Prediction for the focused district under the current model.
    pub fn current<'a>(&self, records: &'a [PredictionRecord]) -> Option<&'a PredictionRecord> {
        find_match(records, self.focused()?, self.model)
    }

    /// Info-panel contents for the focused district, if any district is focused.
    pub fn summary(&self, records: &[PredictionRecord]) -> Option<DistrictSummary> {
        let name = self.focused()?;
        Some(DistrictSummary::new(name, self.model, find_match(records, name, self.model)))
    }

    /// Style of a district polygon. The fill encodes the immigration z-score.
    /// The selected district (exact raw name) gets the heaviest outline, the
    /// hovered one a lighter highlight; selection wins when both apply.
    pub fn style_for(&self, feature_name: &str, records: &[PredictionRecord]) -> FeatureStyle {
        let fill = find_match(records, feature_name, self.model)
            .map_or(Rgb::NO_DATA, |r| color_for(r.immigration_pred_z));

        if self.selected() == Some(feature_name) {
            FeatureStyle { fill, outline: HIGHLIGHT_OUTLINE, weight: 3, fill_opacity: 0.9 }
        } else if self.hovered() == Some(feature_name) {
            FeatureStyle { fill, outline: HIGHLIGHT_OUTLINE, weight: 2, fill_opacity: 0.85 }
        } else {
            FeatureStyle { fill, outline: DEFAULT_OUTLINE, weight: 1, fill_opacity: 0.7 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<PredictionRecord> {
        vec![
            PredictionRecord { immigration_pred_z: Some(3.0), ..PredictionRecord::new("Ñuñoa", "lineal") },
            PredictionRecord { immigration_pred_z: Some(-3.0), ..PredictionRecord::new("Ñuñoa", "random_forest") },
            PredictionRecord { immigration_pred_z: Some(0.0), ..PredictionRecord::new("Renca", "lineal") },
        ]
    }

    #[test]
    fn hover_takes_precedence_over_selection() {
        let mut selection = Selection::default();
        assert_eq!(selection.focused(), None);

        selection.select(Some("Renca"));
        assert_eq!(selection.focused(), Some("Renca"));

        selection.hover(Some("Ñuñoa"));
        assert_eq!(selection.focused(), Some("Ñuñoa"));

        selection.hover(None);
        assert_eq!(selection.focused(), Some("Renca"));

        selection.hover(Some(""));
        assert_eq!(selection.hovered(), None);
    }

    #[test]
    fn current_follows_model_changes() {
        let records = records();
        let mut selection = Selection::new(Model::Linear);
        assert!(selection.current(&records).is_none());

        selection.select(Some("nunoa"));
        assert_eq!(selection.current(&records).unwrap().immigration_pred_z, Some(3.0));

        selection.set_model(Model::RandomForest);
        assert_eq!(selection.current(&records).unwrap().immigration_pred_z, Some(-3.0));

        selection.set_model(Model::GradientBoosting);
        assert!(selection.current(&records).is_none());
        assert!(selection.summary(&records).unwrap().prediction.is_none());
    }

    #[test]
    fn styles() {
        let records = records();
        let mut selection = Selection::new(Model::Linear);
        selection.select(Some("Renca"));

        let renca = selection.style_for("Renca", &records);
        assert_eq!(renca.fill, Rgb::WHITE);
        assert_eq!(renca.weight, 3);

        let nunoa = selection.style_for("Ñuñoa", &records);
        assert_eq!(nunoa.fill, Rgb::RED);
        assert_eq!(nunoa.weight, 1);

        assert_eq!(selection.style_for("Pirque", &records).fill, Rgb::NO_DATA);

        selection.hover(Some("Ñuñoa"));
        let hovered = selection.style_for("Ñuñoa", &records);
        assert_eq!(hovered.fill, Rgb::RED);
        assert_eq!(hovered.outline, HIGHLIGHT_OUTLINE);
        assert_eq!(hovered.weight, 2);
        assert_eq!(hovered.fill_opacity, 0.85);

        selection.hover(Some("Renca"));
        assert_eq!(selection.style_for("Renca", &records).weight, 3);
        assert_eq!(selection.style_for("Ñuñoa", &records).outline, DEFAULT_OUTLINE);
    }
}
