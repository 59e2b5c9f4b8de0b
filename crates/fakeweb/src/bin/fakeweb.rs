//! CLI for writing a fake web to a directory.
//!
//! # Usage
//!
//! ```bash
//! fakeweb <OUTPUT_DIR> [PAGES_COUNT] [BACKLINKS_MEAN] [BACKLINKS_STD_DEV]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fakeweb::build_site;
use fw_core::config::{BACKLINKS_MEAN_DEFAULT, BACKLINKS_STD_DEV_DEFAULT, PAGES_COUNT_DEFAULT};
use fw_core::{GraphConfig, Result, SelfLinkPolicy};
use tracing::{error, info};

/// Generate a randomly linked web of static HTML pages.
#[derive(Debug, Parser)]
#[command(name = "fakeweb", version, allow_negative_numbers = true)]
struct Args {
    /// Destination directory, created if missing
    output_dir: PathBuf,

    /// Number of pages to generate
    #[arg(default_value_t = PAGES_COUNT_DEFAULT)]
    pages_count: usize,

    /// Mean number of backlinks per page
    #[arg(default_value_t = BACKLINKS_MEAN_DEFAULT)]
    backlinks_mean: f64,

    /// Standard deviation of backlinks per page
    #[arg(default_value_t = BACKLINKS_STD_DEV_DEFAULT)]
    backlinks_std_dev: f64,

    /// Seed for reproducible output (falls back to FAKEWEB_SEED, then random)
    #[arg(long)]
    seed: Option<u64>,

    /// Let a page be drawn as one of its own referrers
    #[arg(long)]
    allow_self_links: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = fakeweb::logging::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "fakeweb failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let seed = match args.seed {
        Some(seed) => {
            info!(seed, "Seed {seed} (from --seed)");
            seed
        }
        None => fw_dst::get_or_generate_seed()?,
    };

    let self_links = if args.allow_self_links {
        SelfLinkPolicy::Include
    } else {
        SelfLinkPolicy::Exclude
    };
    let config = GraphConfig::new(args.pages_count, args.backlinks_mean, args.backlinks_std_dev)
        .with_self_links(self_links);

    let summary = build_site(config, seed, &args.output_dir)?;
    info!(
        pages_written = summary.pages_written,
        links_written = summary.links_written,
        "Done"
    );
    Ok(())
}
