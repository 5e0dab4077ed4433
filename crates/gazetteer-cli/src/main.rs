//! postal-gazetteer — builds the postal-code gazetteer lookup table
//!
//! Reads the GeoNames postal-code GeoJSON export, keeps the first entry for
//! every `"{country_code}-{postal_code}"` key and writes the result as a
//! pretty-printed JSON array.
//!
//! Usage examples
//! --------------
//!
//! - Convert with the default file names
//!   $ postal-gazetteer
//!
//! - Explicit paths
//!   $ postal-gazetteer --input postal.geojson --output postal-codes.json
//!
//! - Unattended: fetch the dataset if missing and overwrite the output
//!   $ postal-gazetteer --yes
//!
//! - Keep going past broken features
//!   $ postal-gazetteer --skip-malformed
//!
//! Data source
//! -----------
//!
//! When the input file is missing the tool offers to download the export
//! from Opendatasoft (override with `--url`). A download that ends short of
//! its advertised size is deleted again.
mod args;
mod progress;
mod prompt;

use crate::args::CliArgs;
use crate::progress::ConsoleProgress;
use crate::prompt::{AssumeYes, Confirm, Console};
use anyhow::{Context, Result};
use clap::Parser;
use gazetteer_core::{build_gazetteer, loader, MalformedPolicy};
use tracing::{debug, info, Level};
use tracing_log::LogTracer;
use tracing_subscriber::FmtSubscriber;

/// How a run ended when it did not fail.
enum Outcome {
    Written,
    Declined,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args)?;

    let mut prompt: Box<dyn Confirm> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(Console::stdio())
    };

    match run(&args, prompt.as_mut())? {
        Outcome::Written => {}
        Outcome::Declined => println!("Exiting..."),
    }

    Ok(())
}

fn init_logging(args: &CliArgs) -> Result<()> {
    let log_level = if args.debug {
        Level::DEBUG
    } else if args.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    // reqwest logs through the `log` crate.
    LogTracer::init()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(args: &CliArgs, prompt: &mut dyn Confirm) -> Result<Outcome> {
    // 1. Acquisition
    if !args.input.exists() && !acquire(args, prompt)? {
        return Ok(Outcome::Declined);
    }

    // 2. Load + parse
    println!("Reading input file: {}...", args.input.display());
    let text = loader::read_dataset(&args.input)?;
    println!("Parsing geojson... This may take a while.");
    let collection = loader::parse_collection(&text, &args.input)?;
    drop(text);

    // 3. Transform + dedup
    let policy = if args.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Abort
    };
    debug!(?policy, features = collection.features.len(), "converting");
    let mut progress = ConsoleProgress::items();
    let gazetteer = build_gazetteer(&collection, policy, &mut progress)?;
    drop(collection);

    // 4. Summary
    let stats = gazetteer.stats();
    println!(
        "Found {} unique postal codes in {} countries.",
        stats.records, stats.countries
    );
    if stats.duplicates > 0 || stats.malformed > 0 {
        println!(
            "Skipped {} duplicate and {} malformed features.",
            stats.duplicates, stats.malformed
        );
    }

    // 5. Overwrite gate
    println!("Writing gazetteer to output file: {}...", args.output.display());
    if args.output.exists() && !args.force {
        let question = format!(
            "Output file {} already exists! Do you want to overwrite it?",
            args.output.display()
        );
        if !prompt.confirm(&question, false)? {
            return Ok(Outcome::Declined);
        }
    }

    // 6. Write
    gazetteer
        .write_to(&args.output)
        .context("An error occurred while writing the output file")?;
    info!(path = %args.output.display(), records = stats.records, "gazetteer written");

    Ok(Outcome::Written)
}

/// Offers to download the missing input. `Ok(false)` means the user declined.
#[cfg(feature = "fetch")]
fn acquire(args: &CliArgs, prompt: &mut dyn Confirm) -> Result<bool> {
    use gazetteer_core::loader::fetch::fetch_dataset;

    let question = format!(
        "Input file {} does not exist! Would you like to download it automatically?",
        args.input.display()
    );
    if !prompt.confirm(&question, true)? {
        return Ok(false);
    }

    let mut progress = ConsoleProgress::bytes();
    let bytes = fetch_dataset(&args.url, &args.input, &mut progress)
        .context("An error occurred while downloading the file")?;
    info!(bytes, path = %args.input.display(), "dataset downloaded");
    Ok(true)
}

#[cfg(not(feature = "fetch"))]
fn acquire(args: &CliArgs, _prompt: &mut dyn Confirm) -> Result<bool> {
    anyhow::bail!(
        "Input file {} does not exist and this build cannot download it (feature `fetch` is off)",
        args.input.display()
    )
}
