use std::path::PathBuf;

/// Choropleth selection CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "choroselect", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Load a map session, replay clicks and print one style per region as JSON lines
    Styles(StylesArgs),

    /// Print the scale color for a value within [min, max]
    Scale(ScaleArgs),
}

#[derive(clap::Args, Debug)]
pub struct StylesArgs {
    /// JSON session config (boundary, metrics, filter field, palette)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Boundary GeoJSON: local path or http(s) URL (overrides config)
    #[arg(long)]
    pub boundary: Option<String>,

    /// Metric query endpoint or saved response file (overrides config)
    #[arg(long)]
    pub metrics: Option<String>,

    /// Metric query text (overrides config)
    #[arg(long)]
    pub query: Option<String>,

    /// Metric dataset id (overrides config)
    #[arg(long)]
    pub dataset: Option<String>,

    /// Embed filter field (overrides config)
    #[arg(long)]
    pub field: Option<String>,

    /// Region clicks to replay, in order (repeatable)
    #[arg(long = "click", value_name = "REGION")]
    pub clicks: Vec<String>,

    /// Press Explore after the clicks
    #[arg(long)]
    pub explore: bool,

    /// Press Close at the end
    #[arg(long)]
    pub close: bool,
}

#[derive(clap::Args, Debug)]
pub struct ScaleArgs {
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub min: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub max: f64,
}
