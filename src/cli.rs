use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Output directory for rendered plots
    #[arg(long, default_value = "target/plots")]
    pub out_dir: String,

    /// Path to config TOML
    #[arg(long, default_value = "corrmat.toml")]
    pub config: String,

    /// Target variable for sub-matrix extraction
    #[arg(long, default_value = "A")]
    pub target: String,

    /// Extraction threshold (overrides config)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Drop negatively correlated variables (overrides config)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub skip_negatives: Option<bool>,

    /// Seed for the random demo dataset
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}
