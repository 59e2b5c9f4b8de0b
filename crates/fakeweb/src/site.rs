//! Writes a generated web to disk.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use fw_core::{FakeWebError, Page, Result};
use tracing::info;

use crate::render::{render_index, render_page, INDEX_FILENAME};

/// Counts from a completed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    /// Page files written, not counting the index
    pub pages_written: usize,
    /// Links across all page files, not counting the index
    pub links_written: usize,
    /// Where the index was written
    pub index_path: PathBuf,
}

/// Renders pages into an output directory and finishes with an index.
///
/// Existing files with colliding names are overwritten. Nothing is
/// cleaned up if a write fails part way.
#[derive(Debug, Clone)]
pub struct SiteWriter {
    output_dir: PathBuf,
}

impl SiteWriter {
    /// Create a writer targeting `output_dir`. Nothing is touched until a
    /// write method is called.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Create the output directory (and parents) if absent.
    ///
    /// # Errors
    ///
    /// Returns [`FakeWebError::Io`] if the directory cannot be created.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|e| FakeWebError::io(&self.output_dir, e))
    }

    /// Render and write one page to `output_dir/identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`FakeWebError::Io`] if the file cannot be written.
    pub fn write_page(&self, page: &Page) -> Result<PathBuf> {
        let path = self.output_dir.join(page.identifier());
        write_file(&path, &render_page(page))?;
        Ok(path)
    }

    /// Render and write the index linking to `identifiers`.
    ///
    /// # Errors
    ///
    /// Returns [`FakeWebError::Io`] if the file cannot be written.
    pub fn write_index(&self, identifiers: &BTreeSet<String>) -> Result<PathBuf> {
        let path = self.output_dir.join(INDEX_FILENAME);
        write_file(&path, &render_index(identifiers))?;
        Ok(path)
    }

    /// Write every page in order, then the index.
    ///
    /// # Errors
    ///
    /// Returns the first [`FakeWebError::Io`] encountered; later pages and
    /// the index are not written.
    pub fn write_all<'a, I>(&self, pages: I) -> Result<SiteSummary>
    where
        I: IntoIterator<Item = (usize, &'a Page)>,
        I::IntoIter: ExactSizeIterator,
    {
        self.prepare()?;

        let pages = pages.into_iter();
        let pages_count = pages.len();
        let mut index_links = BTreeSet::new();
        let mut links_written = 0;

        for (index, page) in pages {
            let path = self.write_page(page)?;
            info!(
                percent = %format!("{:.2}", percent(index + 1, pages_count)),
                path = %path.display(),
                backlinks = page.backlinks_requested(),
                links = page.outbound_links().len(),
                "Rendered page"
            );
            links_written += page.outbound_links().len();
            index_links.insert(page.identifier().to_owned());
        }

        let index_path = self.write_index(&index_links)?;
        info!(
            pages_written = index_links.len(),
            links_written,
            path = %index_path.display(),
            "Wrote index page"
        );

        Ok(SiteSummary {
            pages_written: index_links.len(),
            links_written,
            index_path,
        })
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| FakeWebError::io(path, e))
}

fn percent(part: usize, whole: usize) -> f64 {
    debug_assert!(whole > 0, "percent of an empty run");
    part as f64 / whole as f64 * 100.0
}
