pub mod bounds;
pub mod join;
pub mod locate;
pub mod stats;

use migramap::io::{read_features_geojson, LoadOptions};
use migramap::GeoFeature;

use crate::cli::FeatureArgs;

pub(crate) fn load_features(args: &FeatureArgs) -> anyhow::Result<Vec<GeoFeature>> {
    let options = LoadOptions { name_property: args.name_property.clone() };
    read_features_geojson(&args.features, &options)
}
