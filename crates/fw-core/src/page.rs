//! A single page of the fake web.

use std::collections::BTreeSet;

/// A page with a unique identifier and the set of pages it links to.
///
/// `outbound_links` is a `BTreeSet` so duplicates are impossible and
/// iteration is already in ascending lexicographic order for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    identifier: String,
    outbound_links: BTreeSet<String>,
    backlinks_requested: usize,
}

impl Page {
    /// Create a page with no links.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        debug_assert!(!identifier.is_empty(), "Page identifier must not be empty");

        Self {
            identifier,
            outbound_links: BTreeSet::new(),
            backlinks_requested: 0,
        }
    }

    /// Create a page that links to every identifier in `links`.
    ///
    /// Used for the synthetic index page.
    #[must_use]
    pub fn with_links(identifier: impl Into<String>, links: BTreeSet<String>) -> Self {
        let mut page = Self::new(identifier);
        page.outbound_links = links;
        page
    }

    /// The page's filename.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Identifiers of the pages this page links to, sorted.
    #[must_use]
    pub fn outbound_links(&self) -> &BTreeSet<String> {
        &self.outbound_links
    }

    /// Whether this page links to `identifier`.
    #[must_use]
    pub fn links_to(&self, identifier: &str) -> bool {
        self.outbound_links.contains(identifier)
    }

    /// Number of pages asked to link to this one (after clamping).
    #[must_use]
    pub fn backlinks_requested(&self) -> usize {
        self.backlinks_requested
    }

    /// Record the clamped backlink count drawn for this page.
    pub fn set_backlinks_requested(&mut self, count: usize) {
        self.backlinks_requested = count;
    }

    /// Add a link target. Returns false if it was already present.
    pub fn add_link(&mut self, target: &str) -> bool {
        if self.outbound_links.contains(target) {
            return false;
        }
        self.outbound_links.insert(target.to_owned())
    }
}
