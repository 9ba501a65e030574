/// Bounded in-memory thumbnail cache
///
/// Thumbnails are keyed by video path and evicted least-recently-used
/// first once the cache holds more than its capacity. A miss generates
/// the thumbnail synchronously through a `FrameExtractor`; failed
/// generations are logged and never cached.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use super::extract::{decode_thumbnail, FrameExtractor, Thumbnail};
use crate::error::Result;

/// Default number of thumbnails kept in memory.
pub const DEFAULT_CAPACITY: usize = 5;

pub struct ThumbnailCache<E> {
    entries: LruCache<String, Arc<Thumbnail>>,
    extractor: E,
}

impl<E: FrameExtractor> ThumbnailCache<E> {
    /// Creates a cache holding at most `capacity` thumbnails.
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize, extractor: E) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            extractor,
        }
    }

    /// Returns the thumbnail for `path`, generating it on a miss.
    ///
    /// A hit marks the entry as most recently used. `None` means the
    /// thumbnail could not be produced; the failure has been logged.
    pub fn get(&mut self, path: &str) -> Option<Arc<Thumbnail>> {
        if let Some(thumb) = self.entries.get(path) {
            return Some(Arc::clone(thumb));
        }

        match self.generate(path) {
            Ok(thumb) => {
                let thumb = Arc::new(thumb);
                if let Some((evicted, _)) = self.entries.push(path.to_string(), Arc::clone(&thumb)) {
                    println!("🗑️  Evicted thumbnail: {}", evicted);
                }
                Some(thumb)
            }
            Err(e) => {
                eprintln!("❌ Error creating thumbnail for {}: {}", path, e);
                None
            }
        }
    }

    fn generate(&self, path: &str) -> Result<Thumbnail> {
        let data = self.extractor.extract_frame(Path::new(path))?;
        decode_thumbnail(&data)
    }

    /// Whether `path` is cached, without touching its recency
    #[cfg(test)]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains(path)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    #[cfg(test)]
    pub fn extractor(&self) -> &E {
        &self.extractor
    }
}
