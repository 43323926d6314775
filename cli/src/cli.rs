use std::path::PathBuf;

use migramap::Model;

/// Comuna migration predictions CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "migramap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Join district features with the predictions of one model
    Join(JoinArgs),

    /// Print the prediction ranges of one model
    Stats(StatsArgs),

    /// Print the bounding box of all districts
    Bounds(BoundsArgs),

    /// Find the district containing a point
    Locate(LocateArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum OutputFormat { Table, Json }

#[derive(clap::Args, Debug)]
pub struct FeatureArgs {
    /// District features (GeoJSON FeatureCollection)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub features: PathBuf,

    /// Feature property holding the district name
    #[arg(long, default_value = migramap::io::DEFAULT_NAME_PROPERTY)]
    pub name_property: String,
}

#[derive(clap::Args, Debug)]
pub struct JoinArgs {
    #[command(flatten)]
    pub features: FeatureArgs,

    /// Prediction records (.json array or .csv table)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub predictions: PathBuf,

    /// Model whose predictions are shown: linear, random_forest, gradient_boosting
    #[arg(short, long, default_value = "linear", value_parser = parse_model)]
    pub model: Model,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Prediction records (.json array or .csv table)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub predictions: PathBuf,

    /// Model to aggregate, defaults to all models
    #[arg(short, long, value_parser = parse_model)]
    pub model: Option<Model>,
}

#[derive(clap::Args, Debug)]
pub struct BoundsArgs {
    #[command(flatten)]
    pub features: FeatureArgs,

    /// Extra margin in degrees on every side
    #[arg(long, default_value_t = 0.0)]
    pub padding: f64,
}

#[derive(clap::Args, Debug)]
pub struct LocateArgs {
    #[command(flatten)]
    pub features: FeatureArgs,

    /// Latitude of the point
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the point
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,
}

fn parse_model(id: &str) -> Result<Model, String> {
    Model::parse(id).ok_or_else(|| {
        let known: Vec<_> = Model::ALL.iter().map(|m| m.id()).collect();
        format!("unknown model {:?}, expected one of: {}", id, known.join(", "))
    })
}
