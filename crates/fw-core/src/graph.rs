//! The fully materialized page graph.
//!
//! Inbound links for page K may be assigned while processing any page, so
//! the graph is only handed out once every sampling pass has run. Iteration
//! over a finished `WebGraph` is the lazy sequence consumers see.

use std::collections::{BTreeSet, HashMap};

use crate::page::Page;

/// All pages of a generated web, in construction order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebGraph {
    pages: Vec<Page>,
}

impl WebGraph {
    /// Wrap pages whose link sets are final.
    #[must_use]
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the graph has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// `(index, page)` pairs in construction order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &Page)> + '_ {
        self.pages.iter().enumerate()
    }

    /// Identifiers of every page.
    #[must_use]
    pub fn identifiers(&self) -> BTreeSet<String> {
        self.pages
            .iter()
            .map(|page| page.identifier().to_owned())
            .collect()
    }

    /// Total number of edges across all outbound sets.
    #[must_use]
    pub fn links_count(&self) -> usize {
        self.pages.iter().map(|page| page.outbound_links().len()).sum()
    }

    /// For each page index, how many pages link to it.
    ///
    /// Links to identifiers outside the graph are ignored.
    #[must_use]
    pub fn inbound_counts(&self) -> Vec<usize> {
        let positions: HashMap<&str, usize> = self
            .pages
            .iter()
            .enumerate()
            .map(|(index, page)| (page.identifier(), index))
            .collect();

        let mut counts = vec![0; self.pages.len()];
        for page in &self.pages {
            for target in page.outbound_links() {
                if let Some(&index) = positions.get(target.as_str()) {
                    counts[index] += 1;
                }
            }
        }
        counts
    }
}

impl IntoIterator for WebGraph {
    type Item = (usize, Page);
    type IntoIter = std::iter::Enumerate<std::vec::IntoIter<Page>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter().enumerate()
    }
}

impl<'a> IntoIterator for &'a WebGraph {
    type Item = (usize, &'a Page);
    type IntoIter = std::iter::Enumerate<std::slice::Iter<'a, Page>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter().enumerate()
    }
}
