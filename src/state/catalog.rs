use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::data::VideoEntry;
use crate::error::Result;

/// Video file extensions picked up by the scan
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "avi", "mov", "mkv"];

/// The Catalog manages the SQLite database of known video paths.
/// It is append-only: entries are added by the initial scan and never
/// updated or removed.
pub struct Catalog {
    conn: Connection,
    db_path: PathBuf,
}

impl Catalog {
    /// Open (or create) the catalog database at `db_path` and make sure
    /// the schema exists.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        let conn = Connection::open(&db_path)?;

        println!("📁 Catalog opened at: {}", db_path.display());

        let catalog = Catalog { conn, db_path };
        catalog.register_functions()?;
        catalog.init_schema()?;
        Ok(catalog)
    }

    /// In-memory catalog, used by tests
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let catalog = Catalog {
            conn: Connection::open_in_memory()?,
            db_path: PathBuf::from(":memory:"),
        };
        catalog.register_functions()?;
        catalog.init_schema()?;
        Ok(catalog)
    }

    /// `unicode_lower(text)`: SQLite's own lower() and LIKE only fold ASCII
    fn register_functions(&self) -> Result<()> {
        self.conn.create_scalar_function(
            "unicode_lower",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let text: String = ctx.get(0)?;
                Ok(text.to_lowercase())
            },
        )?;
        Ok(())
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS video_files (
                id      INTEGER PRIMARY KEY AUTOINCREMENT,
                path    TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Get the path to the database file
    pub fn path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Number of videos in the catalog
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM video_files", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Populate an empty catalog by scanning `root` recursively.
    ///
    /// Does nothing when the catalog already holds entries, so calling it
    /// on every startup never duplicates rows. Returns the number of paths
    /// inserted.
    pub fn initialize(&mut self, root: &Path) -> Result<usize> {
        self.init_schema()?;

        if self.count()? > 0 {
            return Ok(0);
        }

        println!("🔍 Scanning for videos under: {}", root.display());
        let found = scan_videos(root);

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO video_files (path) VALUES (?1)")?;
            for path in &found {
                stmt.execute(params![path])?;
            }
        }
        tx.commit()?;

        println!("✅ Catalog initialized with {} videos", found.len());
        Ok(found.len())
    }

    /// Every stored video, in storage order
    pub fn list_all(&self) -> Result<Vec<VideoEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, path FROM video_files ORDER BY id")?;

        let entries = stmt
            .query_map([], |row| {
                Ok(VideoEntry {
                    id: row.get(0)?,
                    path: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }

    /// Videos whose path contains `query`, ignoring case, in storage order.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Result<Vec<VideoEntry>> {
        if query.is_empty() {
            return self.list_all();
        }

        let mut stmt = self.conn.prepare(
            "SELECT id, path FROM video_files
             WHERE instr(unicode_lower(path), ?1) > 0
             ORDER BY id",
        )?;

        let entries = stmt
            .query_map([query.to_lowercase()], |row| {
                Ok(VideoEntry {
                    id: row.get(0)?,
                    path: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }
}

/// Walk `root` and collect every file with a video extension,
/// in directory-walk order (entries sorted by name within a directory).
fn scan_videos(root: &Path) -> Vec<String> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        if !is_video(path) {
            continue;
        }

        found.push(path.to_string_lossy().to_string());
        if found.len() % 100 == 0 {
            println!("⏳ Found {} videos...", found.len());
        }
    }

    found
}

fn is_video(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            VIDEO_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("db_path", &self.db_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    fn paths(entries: &[VideoEntry]) -> Vec<String> {
        entries.iter().map(|e| e.path.clone()).collect()
    }

    #[test]
    fn test_initialize_scans_supported_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "a.mp4");
        touch(root, "b.avi");
        touch(root, "notes.txt");
        touch(root, "nested/c.mov");
        touch(root, "nested/deeper/d.mkv");
        touch(root, "nested/cover.jpg");
        touch(root, "upper/E.MP4");

        let mut catalog = Catalog::open_in_memory().unwrap();
        let inserted = catalog.initialize(root).unwrap();

        let expected: Vec<String> = [
            "a.mp4",
            "b.avi",
            "nested/c.mov",
            "nested/deeper/d.mkv",
            "upper/E.MP4",
        ]
        .iter()
        .map(|p| root.join(p).to_string_lossy().to_string())
        .collect();

        assert_eq!(inserted, 5);
        assert_eq!(paths(&catalog.list_all().unwrap()), expected);
    }

    #[test]
    fn test_initialize_twice_does_not_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "one.mp4");
        touch(dir.path(), "two.mkv");

        let mut catalog = Catalog::open_in_memory().unwrap();
        assert_eq!(catalog.initialize(dir.path()).unwrap(), 2);

        touch(dir.path(), "three.avi");
        assert_eq!(catalog.initialize(dir.path()).unwrap(), 0);
        assert_eq!(catalog.count().unwrap(), 2);
    }

    #[test]
    fn test_catalog_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let videos = dir.path().join("videos");
        touch(&videos, "clip.mp4");
        let db_path = dir.path().join("videos.db");

        {
            let mut catalog = Catalog::open(&db_path).unwrap();
            catalog.initialize(&videos).unwrap();
        }

        let mut reopened = Catalog::open(&db_path).unwrap();
        assert_eq!(reopened.initialize(&videos).unwrap(), 0);
        assert_eq!(reopened.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "ABC_trip.mp4");
        touch(dir.path(), "holiday.mov");
        touch(dir.path(), "xabcx.mkv");

        let mut catalog = Catalog::open_in_memory().unwrap();
        catalog.initialize(dir.path()).unwrap();

        let found = paths(&catalog.search("abc").unwrap());
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.to_lowercase().contains("abc")));

        let upper = paths(&catalog.search("ABC").unwrap());
        assert_eq!(found, upper);
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "one.mp4");
        touch(dir.path(), "two.mp4");

        let mut catalog = Catalog::open_in_memory().unwrap();
        catalog.initialize(dir.path()).unwrap();

        assert_eq!(catalog.search("").unwrap(), catalog.list_all().unwrap());
    }

    #[test]
    fn test_search_treats_wildcards_literally() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "100%_done.mp4");
        touch(dir.path(), "1000_done.mp4");

        let mut catalog = Catalog::open_in_memory().unwrap();
        catalog.initialize(dir.path()).unwrap();

        let found = catalog.search("%_").unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].path.ends_with("100%_done.mp4"));
    }

    #[test]
    fn test_search_folds_non_ascii_case() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Été_vacances.mp4");
        touch(dir.path(), "winter.mkv");

        let mut catalog = Catalog::open_in_memory().unwrap();
        catalog.initialize(dir.path()).unwrap();

        for query in ["Été", "été", "ÉTÉ_VACANCES"] {
            let found = catalog.search(query).unwrap();
            assert_eq!(found.len(), 1, "query {:?}", query);
            assert!(found[0].path.ends_with("Été_vacances.mp4"));
        }
    }

    #[test]
    fn test_search_function_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let videos = dir.path().join("videos");
        touch(&videos, "Ölfilm.mov");
        let db_path = dir.path().join("videos.db");

        Catalog::open(&db_path).unwrap().initialize(&videos).unwrap();

        let reopened = Catalog::open(&db_path).unwrap();
        assert_eq!(reopened.search("ölfilm").unwrap().len(), 1);
    }
}
