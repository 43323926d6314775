use anyhow::Result;
use migramap::geom::DistrictIndex;

use crate::cli::{Cli, LocateArgs};

pub fn run(_cli: &Cli, args: &LocateArgs) -> Result<()> {
    let features = super::load_features(&args.features)?;
    let index = DistrictIndex::new(&features);
    match index.locate(args.lat, args.lng) {
        Some(i) => println!("{}", features[i].name),
        None => println!("[locate] no district contains ({}, {})", args.lat, args.lng),
    }
    Ok(())
}
