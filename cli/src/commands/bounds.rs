use anyhow::Result;
use migramap::compute_bounds;

use crate::cli::{BoundsArgs, Cli};

pub fn run(_cli: &Cli, args: &BoundsArgs) -> Result<()> {
    let features = super::load_features(&args.features)?;
    match compute_bounds(&features)? {
        Some(bounds) => {
            let bounds = bounds.padded(args.padding);
            println!("{}", serde_json::to_string_pretty(&bounds)?);
        }
        None => println!("[bounds] no coordinates in {}", args.features.features.display()),
    }
    Ok(())
}
