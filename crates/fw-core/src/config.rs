//! Generation parameters.

use crate::error::{FakeWebError, Result};

/// Default number of pages in a generated web.
pub const PAGES_COUNT_DEFAULT: usize = 10_000;

/// Default mean of the backlink count distribution.
pub const BACKLINKS_MEAN_DEFAULT: f64 = 5.0;

/// Default standard deviation of the backlink count distribution.
pub const BACKLINKS_STD_DEV_DEFAULT: f64 = 2.0;

/// Which pages may be chosen as referrers of page P.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfLinkPolicy {
    /// Every page except P. A page never links to itself.
    #[default]
    Exclude,
    /// Every page including P, so a page may end up linking to itself.
    Include,
}

impl SelfLinkPolicy {
    /// Number of candidate referrers for one page in a web of `pages_count`.
    #[must_use]
    pub fn universe_count(self, pages_count: usize) -> usize {
        match self {
            SelfLinkPolicy::Exclude => pages_count.saturating_sub(1),
            SelfLinkPolicy::Include => pages_count,
        }
    }

    /// Short name for log output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SelfLinkPolicy::Exclude => "exclude",
            SelfLinkPolicy::Include => "include",
        }
    }
}

/// Configuration for graph generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Number of pages to generate
    pub pages_count: usize,
    /// Mean of the normal distribution backlink counts are drawn from
    pub backlinks_mean: f64,
    /// Standard deviation of that distribution
    pub backlinks_std_dev: f64,
    /// Whether a page may be drawn as its own referrer
    pub self_links: SelfLinkPolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            pages_count: PAGES_COUNT_DEFAULT,
            backlinks_mean: BACKLINKS_MEAN_DEFAULT,
            backlinks_std_dev: BACKLINKS_STD_DEV_DEFAULT,
            self_links: SelfLinkPolicy::default(),
        }
    }
}

impl GraphConfig {
    /// Create a config with the given distribution and the default policy.
    #[must_use]
    pub fn new(pages_count: usize, backlinks_mean: f64, backlinks_std_dev: f64) -> Self {
        Self {
            pages_count,
            backlinks_mean,
            backlinks_std_dev,
            ..Default::default()
        }
    }

    /// Set the self-link policy.
    #[must_use]
    pub fn with_self_links(mut self, self_links: SelfLinkPolicy) -> Self {
        self.self_links = self_links;
        self
    }

    /// Check every parameter is usable for generation.
    ///
    /// # Errors
    ///
    /// Returns [`FakeWebError::InvalidArgument`] if there are no pages, or
    /// the mean or standard deviation is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.pages_count == 0 {
            return Err(FakeWebError::invalid_argument(
                "pages_count must be positive",
            ));
        }
        if !self.backlinks_mean.is_finite() || self.backlinks_mean < 0.0 {
            return Err(FakeWebError::invalid_argument(format!(
                "backlinks_mean must be a finite non-negative number, got {}",
                self.backlinks_mean
            )));
        }
        if !self.backlinks_std_dev.is_finite() || self.backlinks_std_dev < 0.0 {
            return Err(FakeWebError::invalid_argument(format!(
                "backlinks_std_dev must be a finite non-negative number, got {}",
                self.backlinks_std_dev
            )));
        }
        Ok(())
    }
}
