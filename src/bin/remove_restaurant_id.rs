//! remove-restaurant-id: Drop the `restaurant_id` field from every ingredient
//!
//! Reads `ingredients_with_translations.json` from the current directory and
//! writes `ingredients_without_restaurant_id.json` next to it.
//!
//! Usage:
//!   remove-restaurant-id
//!
//!   # Write through a temp file and rename it into place
//!   remove-restaurant-id --atomic
//!
//!   # Debug logging on stderr (RUST_LOG overrides)
//!   remove-restaurant-id --verbose

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use ingredient_strip::{
    logger, strip_field_with, StripEvent, StripOptions, WriteMode, INPUT_FILE, OUTPUT_FILE,
};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "remove-restaurant-id")]
#[command(about = "Remove restaurant_id from every ingredient record", long_about = None)]
struct Args {
    /// Log debug details to stderr
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Write to a temporary file first and rename it over the output
    #[arg(long)]
    atomic: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose)?;

    let write_mode = if args.atomic {
        WriteMode::Atomic
    } else {
        WriteMode::Direct
    };
    let options = StripOptions::default().with_write_mode(write_mode);

    let result = strip_field_with(INPUT_FILE, OUTPUT_FILE, &options, |event| match event {
        StripEvent::Loaded { count } => println!("Found {} ingredients", count),
        StripEvent::Stripped { removed } => {
            println!("Removed restaurant_id from {} ingredients", removed)
        }
        StripEvent::Written { path } => println!("Cleaned data written to {}", path.display()),
    });

    match result {
        Ok(report) => {
            tracing::debug!(report = ?report, "done");
            println!("✅ Successfully removed restaurant_id fields");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = %e, "strip failed");
            println!("Error: {}", e);
            println!("❌ Failed to process file");
            Ok(ExitCode::FAILURE)
        }
    }
}
