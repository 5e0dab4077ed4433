use clap::Parser;
use gazetteer_core::loader::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use gazetteer_core::loader::fetch::DATASET_URL;

/// CLI arguments for postal-gazetteer
#[derive(Debug, Parser)]
#[command(
    name = "postal-gazetteer",
    version,
    about = "Converts postal codes to a format that can be used in the gazetteer"
)]
pub struct CliArgs {
    /// Input GeoJSON file from Opendatasoft (`.gz` is decompressed on the fly)
    #[arg(short = 'i', long = "input", env = "GAZETTEER_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output JSON file for the gazetteer
    #[arg(short = 'o', long = "output", env = "GAZETTEER_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Where to fetch the dataset from when the input file is missing
    #[cfg(feature = "fetch")]
    #[arg(long = "url", env = "GAZETTEER_DATASET_URL", default_value = DATASET_URL)]
    pub url: String,

    /// Answer yes to every prompt (download missing input, overwrite output)
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Overwrite an existing output file without asking
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Skip features with missing properties or bad coordinates instead of aborting
    #[arg(long = "skip-malformed")]
    pub skip_malformed: bool,

    /// Enable verbose (INFO level) logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug (DEBUG level) logging output
    #[arg(short, long)]
    pub debug: bool,
}
