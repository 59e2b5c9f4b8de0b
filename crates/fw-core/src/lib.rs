//! # fw-core
//!
//! Core types for fake web generation.
//!
//! A fake web is a set of [`Page`]s connected by randomly assigned
//! backlinks. The generator builds a [`WebGraph`] fully in memory and the
//! site writer renders it page by page.
//!
//! ## Model
//!
//! Each page owns the set of identifiers it links *to*. A page P with a
//! requested backlink count of `k` ends up in exactly `k` of those sets.

pub mod config;
pub mod error;
pub mod graph;
pub mod page;

pub use config::{GraphConfig, SelfLinkPolicy};
pub use error::{FakeWebError, Result};
pub use graph::WebGraph;
pub use page::Page;
