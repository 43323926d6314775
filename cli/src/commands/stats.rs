use anyhow::Result;
use migramap::io::read_predictions;
use migramap::{compute_stats, filter_valid, format_number, Model};

use crate::cli::{Cli, StatsArgs};

pub fn run(_cli: &Cli, args: &StatsArgs) -> Result<()> {
    let records = read_predictions(&args.predictions)?;
    let models = match args.model {
        Some(model) => vec![model],
        None => Model::ALL.to_vec(),
    };

    for model in models {
        let stats = compute_stats(&records, model);
        println!("[stats] {} ({} valid records)", model.label(), filter_valid(&records, model).len());
        println!("  emigration:  {} .. {}", format_number(stats.min_emigration), format_number(stats.max_emigration));
        println!("  immigration: {} .. {}", format_number(stats.min_immigration), format_number(stats.max_immigration));
    }
    Ok(())
}
