use anyhow::{ensure, Result};
use choroselect::interpolate;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ScaleArgs) -> Result<()> {
    ensure!(args.min <= args.max, "--min ({}) must not exceed --max ({})", args.min, args.max);

    println!("{}", interpolate(args.value, args.min, args.max));

    Ok(())
}
