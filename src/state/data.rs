/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog database and the gallery.

use std::path::Path;

/// A single video known to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    /// Unique database ID
    pub id: i64,
    /// Path as discovered during the scan (e.g., "./clips/intro.mp4")
    pub path: String,
}

impl VideoEntry {
    /// File name only, falling back to the full path
    pub fn file_name(&self) -> String {
        Path::new(&self.path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.clone())
    }
}
