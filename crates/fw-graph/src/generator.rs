//! Backlink assignment over a fully materialized set of pages.

use fw_core::{FakeWebError, GraphConfig, Page, Result, SelfLinkPolicy, WebGraph};
use fw_dst::DeterministicRng;
use rand_distr::Normal;
use tracing::{debug, info};
use uuid::Builder;

/// Pages processed between progress events in the backlink pass.
pub const PROGRESS_BATCH_PAGES: usize = 10_000;

/// Build the identifier of page `index`.
///
/// `page_{index}_{uuid}.html`, with the UUID built from bytes drawn from
/// `rng` so identifiers are reproducible for a given seed.
pub fn page_identifier(index: usize, rng: &mut DeterministicRng) -> String {
    let uuid = Builder::from_random_bytes(rng.gen::<[u8; 16]>()).into_uuid();
    format!("page_{index}_{uuid}.html")
}

/// Turn a real-valued draw into a backlink count.
///
/// Rounds half to even, then clamps negative values (and NaN) to zero.
/// Values beyond `usize::MAX` saturate.
#[must_use]
pub fn clamp_backlinks(draw: f64) -> usize {
    let rounded = draw.round_ties_even();
    if rounded > 0.0 {
        rounded as usize
    } else {
        0
    }
}

/// Generator for fake web graphs.
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    config: GraphConfig,
}

impl GraphGenerator {
    /// Create a generator for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FakeWebError::InvalidArgument`] if `config` fails
    /// [`GraphConfig::validate`].
    pub fn new(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build the full graph.
    ///
    /// Every page's outbound set is final when this returns. Page K is
    /// linked to by exactly `backlinks_requested` pages.
    ///
    /// # Errors
    ///
    /// Returns [`FakeWebError::InvalidArgument`] if a page draws more
    /// backlinks than its sampling universe holds.
    pub fn generate(&self, rng: &mut DeterministicRng) -> Result<WebGraph> {
        let pages_count = self.config.pages_count;
        let policy = self.config.self_links;
        let universe_count = policy.universe_count(pages_count);

        info!(
            pages_count,
            backlinks_mean = self.config.backlinks_mean,
            backlinks_std_dev = self.config.backlinks_std_dev,
            self_links = policy.name(),
            seed = rng.seed(),
            "Creating pages and backlink counts in memory"
        );

        let normal = Normal::new(self.config.backlinks_mean, self.config.backlinks_std_dev)
            .map_err(|e| FakeWebError::invalid_argument(format!("backlink distribution: {e}")))?;

        let mut pages: Vec<Page> = (0..pages_count)
            .map(|index| Page::new(page_identifier(index, rng)))
            .collect();
        let backlink_counts: Vec<usize> = (0..pages_count)
            .map(|_| clamp_backlinks(rng.sample(&normal)))
            .collect();

        for (index, &backlinks_requested) in backlink_counts.iter().enumerate() {
            let processed_count = index + 1;
            if processed_count % PROGRESS_BATCH_PAGES == 0 {
                info!(
                    processed_count,
                    percent = %format!("{:.2}", percent(processed_count, pages_count)),
                    "[backlinks-loop] progress"
                );
            }

            pages[index].set_backlinks_requested(backlinks_requested);
            if backlinks_requested == 0 {
                continue;
            }

            let referrers = match policy {
                SelfLinkPolicy::Exclude => {
                    rng.sample_indices_excluding(pages_count, backlinks_requested, index)
                }
                SelfLinkPolicy::Include => rng.sample_indices(pages_count, backlinks_requested),
            }
            .ok_or_else(|| {
                FakeWebError::invalid_argument(format!(
                    "page {index} requested {backlinks_requested} backlinks but only \
                     {universe_count} distinct referrers exist (self links: {})",
                    policy.name()
                ))
            })?;

            let target = pages[index].identifier().to_owned();
            for referrer in referrers {
                let added = pages[referrer].add_link(&target);
                debug_assert!(added, "Referrer {referrer} selected twice for page {index}");
            }
        }

        let graph = WebGraph::from_pages(pages);
        debug_assert!(!graph.is_empty() && graph.len() == pages_count);
        debug!(
            links_count = graph.links_count(),
            rng_calls_count = rng.calls_count(),
            "Backlink graph complete"
        );
        Ok(graph)
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn generate(config: GraphConfig, seed: u64) -> Result<WebGraph> {
        let mut rng = DeterministicRng::new(seed);
        GraphGenerator::new(config)?.generate(&mut rng)
    }

    fn assert_graph_invariants(graph: &WebGraph, policy: SelfLinkPolicy) {
        let identifiers = graph.identifiers();
        assert_eq!(identifiers.len(), graph.len(), "Identifiers must be distinct");

        let inbound = graph.inbound_counts();
        for (index, page) in graph.iter() {
            assert_eq!(
                inbound[index],
                page.backlinks_requested(),
                "In-degree of page {index} must match its requested count"
            );
            if policy == SelfLinkPolicy::Exclude {
                assert!(!page.links_to(page.identifier()), "Page {index} links to itself");
            }
            for target in page.outbound_links() {
                assert!(identifiers.contains(target), "Unknown target {target}");
            }
        }
    }

    #[test]
    fn test_clamp_backlinks() {
        assert_eq!(clamp_backlinks(4.4), 4);
        assert_eq!(clamp_backlinks(4.6), 5);
        assert_eq!(clamp_backlinks(2.5), 2);
        assert_eq!(clamp_backlinks(3.5), 4);
        assert_eq!(clamp_backlinks(-0.4), 0);
        assert_eq!(clamp_backlinks(-7.0), 0);
        assert_eq!(clamp_backlinks(f64::NAN), 0);
        assert_eq!(clamp_backlinks(1e300), usize::MAX);
    }

    #[test]
    fn test_page_identifier_format() {
        let mut rng = DeterministicRng::new(12345);
        let id = page_identifier(7, &mut rng);
        assert!(id.starts_with("page_7_"));
        assert!(id.ends_with(".html"));
        // page_7_ + 36-char hyphenated uuid + .html
        assert_eq!(id.len(), "page_7_".len() + 36 + ".html".len());
    }

    #[test]
    fn test_page_identifier_reproducible() {
        let mut rng1 = DeterministicRng::new(99);
        let mut rng2 = DeterministicRng::new(99);
        assert_eq!(page_identifier(0, &mut rng1), page_identifier(0, &mut rng2));

        let mut other = DeterministicRng::new(100);
        assert_ne!(page_identifier(1, &mut rng1), page_identifier(1, &mut other));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(GraphGenerator::new(GraphConfig::new(0, 5.0, 2.0))
            .unwrap_err()
            .is_invalid_argument());
        assert!(GraphGenerator::new(GraphConfig::new(10, 5.0, -1.0))
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_zero_distribution_has_no_links() {
        let graph = generate(GraphConfig::new(3, 0.0, 0.0), 12345).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.links_count(), 0);
        for (_, page) in graph.iter() {
            assert_eq!(page.backlinks_requested(), 0);
            assert!(page.outbound_links().is_empty());
        }
    }

    #[test]
    fn test_dense_graph_without_self_links() {
        let graph = generate(GraphConfig::new(100, 50.0, 0.0), 12345).unwrap();
        assert_eq!(graph.inbound_counts(), vec![50; 100]);
        assert_eq!(graph.links_count(), 100 * 50);
        assert_graph_invariants(&graph, SelfLinkPolicy::Exclude);
    }

    #[test]
    fn test_every_other_page_refers_when_universe_exhausted() {
        let graph = generate(GraphConfig::new(5, 4.0, 0.0), 1).unwrap();
        for (_, page) in graph.iter() {
            assert_eq!(page.outbound_links().len(), 4);
            assert!(!page.links_to(page.identifier()));
        }
    }

    #[test]
    fn test_too_many_backlinks_rejected() {
        let err = generate(GraphConfig::new(5, 6.0, 0.0), 12345).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("page 0 requested 6 backlinks"));

        // Exactly n - 1 is the limit when self links are excluded.
        let err = generate(GraphConfig::new(5, 5.0, 0.0), 12345).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_include_policy_allows_full_universe() {
        let config = GraphConfig::new(5, 5.0, 0.0).with_self_links(SelfLinkPolicy::Include);
        let graph = generate(config, 12345).unwrap();
        assert_graph_invariants(&graph, SelfLinkPolicy::Include);
        for (_, page) in graph.iter() {
            assert!(page.links_to(page.identifier()));
            assert_eq!(page.outbound_links().len(), 5);
        }

        let config = GraphConfig::new(5, 6.0, 0.0).with_self_links(SelfLinkPolicy::Include);
        assert!(generate(config, 12345).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = GraphConfig::new(200, 5.0, 2.0);
        let graph1 = generate(config.clone(), 4242).unwrap();
        let graph2 = generate(config, 4242).unwrap();
        assert_eq!(graph1, graph2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = GraphConfig::new(50, 5.0, 2.0);
        let graph1 = generate(config.clone(), 1).unwrap();
        let graph2 = generate(config, 2).unwrap();
        assert_ne!(graph1.identifiers(), graph2.identifiers());
    }

    #[test]
    fn test_random_seed_invariants() {
        let seed = fw_dst::get_or_generate_seed().unwrap();
        let graph = generate(GraphConfig::new(1_000, 5.0, 2.0), seed).unwrap();
        assert_eq!(graph.len(), 1_000);
        assert_graph_invariants(&graph, SelfLinkPolicy::Exclude);
    }

    #[test]
    fn test_large_sparse_graph() {
        let graph = generate(GraphConfig::new(30_000, 5.0, 2.0), 12345).unwrap();
        assert_eq!(graph.len(), 30_000);

        let inbound = graph.inbound_counts();
        let requested: usize = graph.iter().map(|(_, p)| p.backlinks_requested()).sum();
        assert_eq!(inbound.iter().sum::<usize>(), requested);
        assert_eq!(graph.links_count(), requested);

        // Mean in-degree lands near the configured mean.
        let mean = requested as f64 / graph.len() as f64;
        assert!((mean - 5.0).abs() < 0.2, "mean in-degree {mean}");
    }

    #[test]
    fn test_single_page() {
        let graph = generate(GraphConfig::new(1, 0.0, 0.0), 12345).unwrap();
        assert_eq!(graph.len(), 1);

        let err = generate(GraphConfig::new(1, 1.0, 0.0), 12345).unwrap_err();
        assert!(err.is_invalid_argument());

        let unique: HashSet<&str> = graph.iter().map(|(_, p)| p.identifier()).collect();
        assert_eq!(unique.len(), 1);
    }
}
