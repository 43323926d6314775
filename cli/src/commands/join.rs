use anyhow::Result;
use migramap::io::read_predictions;
use migramap::view::DistrictSummary;
use migramap::Atlas;
use tracing::info;

use crate::cli::{Cli, JoinArgs, OutputFormat};

pub fn run(_cli: &Cli, args: &JoinArgs) -> Result<()> {
    let features = super::load_features(&args.features)?;
    let records = read_predictions(&args.predictions)?;
    let atlas = Atlas::new(features, records);

    let joined = atlas.join(args.model);
    info!("[join] {} of {} comunas have a {} prediction", joined.matched(), joined.len(), args.model);

    let summaries: Vec<_> = joined.iter()
        .map(|(name, record)| DistrictSummary::new(name, args.model, record))
        .collect();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Table => print_table(&summaries),
    }
    Ok(())
}

fn print_table(summaries: &[DistrictSummary]) {
    println!("{:<24} {:>12} {:>12} {:>12} {:>7} {:<10} {}", "comuna", "immigration", "emigration", "balance", "z", "category", "fill");
    for summary in summaries {
        match &summary.prediction {
            Some(p) => println!("{:<24} {:>12} {:>12} {:>12} {:>7} {:<10} {}",
                summary.name,
                p.immigration.formatted,
                p.emigration.formatted,
                p.balance.formatted,
                p.immigration.z_formatted,
                p.immigration.category.tag(),
                p.immigration.color,
            ),
            None => println!("{:<24} {:>12}", summary.name, "no data"),
        }
    }
}
