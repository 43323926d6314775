use std::fmt;

use serde::{Deserialize, Serialize};

/// Predictive model variant whose output is shown on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    #[default]
    #[serde(alias = "lineal")]
    Linear,
    RandomForest,
    GradientBoosting,
}

impl Model {
    /// All selectable models, in the order a model picker lists them.
    pub const ALL: [Model; 3] = [Model::Linear, Model::RandomForest, Model::GradientBoosting];

    /// Canonical identifier, as found in prediction tables.
    pub fn id(&self) -> &'static str {
        match self {
            Model::Linear => "linear",
            Model::RandomForest => "random_forest",
            Model::GradientBoosting => "gradient_boosting",
        }
    }

    /// Human-readable label for a model picker.
    pub fn label(&self) -> &'static str {
        match self {
            Model::Linear => "Linear Regression",
            Model::RandomForest => "Random Forest",
            Model::GradientBoosting => "Gradient Boosting",
        }
    }

    /// Check a model identifier exactly as written in a prediction table.
    /// Only `lineal` is accepted besides the canonical ids.
    pub fn is_id(&self, id: &str) -> bool {
        id == self.id() || (*self == Model::Linear && id == "lineal")
    }

    /// Parse a model identifier. Unknown identifiers return `None`.
    /// Surrounding whitespace and letter case are ignored.
    pub fn parse(id: &str) -> Option<Model> {
        match id.trim().to_ascii_lowercase().as_str() {
            "linear" | "lineal" => Some(Model::Linear),
            "random_forest" => Some(Model::RandomForest),
            "gradient_boosting" => Some(Model::GradientBoosting),
            _ => None,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::Model;

    #[test]
    fn parse_known_ids_and_aliases() {
        assert_eq!(Model::parse("linear"), Some(Model::Linear));
        assert_eq!(Model::parse("lineal"), Some(Model::Linear));
        assert_eq!(Model::parse(" Random_Forest "), Some(Model::RandomForest));
        assert_eq!(Model::parse("gradient_boosting"), Some(Model::GradientBoosting));
    }

    #[test]
    fn parse_unknown_is_none() {
        assert_eq!(Model::parse(""), None);
        assert_eq!(Model::parse("svm"), None);
        assert_eq!(Model::parse("random forest"), None);
    }

    #[test]
    fn table_ids_are_exact() {
        assert!(Model::Linear.is_id("linear"));
        assert!(Model::Linear.is_id("lineal"));
        assert!(Model::RandomForest.is_id("random_forest"));
        assert!(!Model::Linear.is_id(" LINEAR "));
        assert!(!Model::RandomForest.is_id("Random_Forest"));
        assert!(!Model::RandomForest.is_id("lineal"));
    }

    #[test]
    fn ids_round_trip_through_parse() {
        for model in Model::ALL {
            assert_eq!(Model::parse(model.id()), Some(model));
            assert_eq!(model.to_string(), model.id());
        }
    }

    #[test]
    fn default_is_linear() {
        assert_eq!(Model::default(), Model::Linear);
    }
}
