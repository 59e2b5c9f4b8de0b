//! # fw-graph
//!
//! Generates the link graph of a fake web.
//!
//! ## Algorithm
//!
//! 1. Create every page up front with a unique identifier.
//! 2. Draw a backlink count per page from a normal distribution, round
//!    half to even and clamp at zero.
//! 3. For each page P, sample that many distinct referrers without
//!    replacement and add P to each referrer's outbound set.
//!
//! Any page can gain inbound links while a later page is processed, so
//! the whole graph is built before the first page is handed out.
//!
//! ```rust
//! use fw_core::GraphConfig;
//! use fw_dst::DeterministicRng;
//! use fw_graph::GraphGenerator;
//!
//! let generator = GraphGenerator::new(GraphConfig::new(20, 3.0, 1.0)).unwrap();
//! let mut rng = DeterministicRng::new(12345);
//! let graph = generator.generate(&mut rng).unwrap();
//!
//! for (index, page) in graph.iter() {
//!     assert_eq!(graph.inbound_counts()[index], page.backlinks_requested());
//! }
//! ```

pub mod generator;

pub use generator::{clamp_backlinks, page_identifier, GraphGenerator, PROGRESS_BATCH_PAGES};
