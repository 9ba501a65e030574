use std::sync::Arc;

use super::catalog::Catalog;
use super::data::VideoEntry;
use crate::error::{GalleryError, Result};
use crate::thumbs::{FrameExtractor, Thumbnail, ThumbnailCache};

/// One rendered grid cell
#[derive(Debug, Clone)]
pub struct Cell {
    pub entry: VideoEntry,
    /// `None` when the thumbnail could not be generated
    pub thumbnail: Option<Arc<Thumbnail>>,
}

/// The Gallery ties the catalog, the thumbnail cache and the page state
/// together. It holds the current result set (everything, or the last
/// search) and the cells of the page currently on screen.
pub struct Gallery<E> {
    catalog: Catalog,
    cache: ThumbnailCache<E>,
    results: Vec<VideoEntry>,
    page: usize,
    page_size: usize,
    cells: Vec<Cell>,
}

impl<E: FrameExtractor> Gallery<E> {
    /// Load the full catalog and render the first page
    pub fn new(catalog: Catalog, cache: ThumbnailCache<E>, page_size: usize) -> Result<Self> {
        let results = catalog.list_all()?;

        let mut gallery = Gallery {
            catalog,
            cache,
            results,
            page: 0,
            page_size: page_size.max(1),
            cells: Vec::new(),
        };
        gallery.render();

        Ok(gallery)
    }

    /// Number of pages for the current results, `ceil(len / page_size)`
    pub fn page_count(&self) -> usize {
        self.results.len().div_ceil(self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn results(&self) -> &[VideoEntry] {
        &self.results
    }

    /// Cells of the page currently on screen
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Switch to page `page` and render it.
    ///
    /// Pages outside `0..page_count()` are rejected and leave the gallery
    /// untouched. An empty result set still has the empty page 0.
    pub fn change_page(&mut self, page: usize) -> Result<()> {
        let page_count = self.page_count();
        if page >= page_count.max(1) {
            return Err(GalleryError::PageOutOfRange { page, page_count });
        }

        self.page = page;
        self.render();
        Ok(())
    }

    /// Replace the results with the catalog's matches for `query`
    /// and go back to the first page.
    pub fn search(&mut self, query: &str) -> Result<()> {
        self.results = self.catalog.search(query)?;
        self.page = 0;

        println!(
            "🔎 Search {:?}: {} results, {} pages",
            query,
            self.results.len(),
            self.page_count()
        );

        self.render();
        Ok(())
    }

    /// Entries on the current page
    fn page_entries(&self) -> &[VideoEntry] {
        let start = (self.page * self.page_size).min(self.results.len());
        let end = (start + self.page_size).min(self.results.len());
        &self.results[start..end]
    }

    /// Fetch a thumbnail for every entry on the current page
    fn render(&mut self) {
        let entries = self.page_entries().to_vec();

        self.cells = entries
            .into_iter()
            .map(|entry| {
                let thumbnail = self.cache.get(&entry.path);
                Cell { entry, thumbnail }
            })
            .collect();
    }

    #[cfg(test)]
    pub fn cache(&self) -> &ThumbnailCache<E> {
        &self.cache
    }
}
