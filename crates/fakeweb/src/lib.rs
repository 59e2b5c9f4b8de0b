//! # fakeweb
//!
//! Synthesizes a fake hyperlink web and renders it to static HTML.
//!
//! A corpus of pages is connected by randomly assigned backlinks whose
//! counts follow a normal distribution, then written as one HTML file per
//! page plus an `index.html` listing all of them. Useful as fixtures for
//! crawlers, search indexes and link-graph algorithms.
//!
//! # Usage
//!
//! ```bash
//! # 10000 pages, ~5 backlinks each
//! fakeweb out/
//!
//! # 500 pages, mean 8, std dev 3, reproducible
//! fakeweb out/ 500 8 3 --seed 42
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ GraphConfig │ ──> │    Graph    │ ──> │    Site     │
//! │   + seed    │     │  Generator  │     │   Writer    │
//! └─────────────┘     └──────┬──────┘     └──────┬──────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │  WebGraph   │     │ page files  │
//!                     │ (in memory) │     │ + index.html│
//!                     └─────────────┘     └─────────────┘
//! ```

pub mod logging;
pub mod render;
pub mod site;

use std::path::Path;

use fw_core::{GraphConfig, Result};
use fw_dst::DeterministicRng;
use fw_graph::GraphGenerator;

pub use render::{escape_html, render_document, render_index, render_page, INDEX_FILENAME};
pub use site::{SiteSummary, SiteWriter};

/// Generate a web from `config` and `seed` and write it to `output_dir`.
///
/// The graph is fully built before the first file is written.
///
/// # Errors
///
/// Returns `InvalidArgument` for a bad configuration or an impossible
/// backlink draw, and `Io` for filesystem failures.
pub fn build_site(config: GraphConfig, seed: u64, output_dir: &Path) -> Result<SiteSummary> {
    let generator = GraphGenerator::new(config)?;
    let mut rng = DeterministicRng::new(seed);
    let graph = generator.generate(&mut rng)?;

    SiteWriter::new(output_dir).write_all(graph.iter())
}
