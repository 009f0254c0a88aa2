use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "safeall",
    version,
    about = "Mountain-rescue response-time analysis and AAM report generator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load, analyze and write the chart and report for a region.
    Run(RunArgs),
    /// Load and analyze only; no artifacts are written.
    Validate(ValidateArgs),
    /// Write the synthetic demo table for a region as CSV.
    Synth(SynthArgs),
    /// List the built-in regions.
    Regions,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(long, help = "Region label, e.g. 강원, 전북, 제주")]
    pub region: String,

    #[arg(
        long,
        default_value = ".",
        help = "Directory holding the per-region export folders"
    )]
    pub data_dir: PathBuf,

    #[arg(
        long,
        num_args = 1..,
        help = "Incident CSV file(s); bypasses the region folder (repeatable)"
    )]
    pub input: Vec<PathBuf>,

    #[arg(
        long,
        default_value_t = false,
        help = "Fail instead of using synthetic data when no source is found"
    )]
    pub no_synthetic: bool,

    #[arg(long, help = "TOML file overriding analysis and report coefficients")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = false, help = "Also write a JSON summary")]
    pub json: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Also write the high-risk cohort as TSV"
    )]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct SynthArgs {
    #[arg(long)]
    pub region: String,

    #[arg(long, help = "Destination CSV file")]
    pub out: PathBuf,
}
