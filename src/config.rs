/// Gallery settings
///
/// Settings are read from `config.json` in the user's config directory:
/// - Linux: ~/.config/video-gallery/config.json
/// - macOS: ~/Library/Application Support/video-gallery/config.json
/// - Windows: %APPDATA%\video-gallery\config.json
///
/// A missing file means "use the defaults". Any field left out of the
/// file falls back to its default as well.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};
use crate::thumbs::cache::DEFAULT_CAPACITY;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Directory scanned for videos when the catalog is empty
    pub scan_root: PathBuf,
    /// SQLite catalog file
    pub database_path: PathBuf,
    /// Maximum number of decoded thumbnails kept in memory
    pub cache_capacity: usize,
    /// Thumbnails per page
    pub page_size: usize,
    /// Grid columns
    pub columns: usize,
    /// Frame extraction tool
    pub ffmpeg_program: String,
    /// Media player launched on click
    pub player_program: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            scan_root: PathBuf::from("."),
            database_path: PathBuf::from("videos.db"),
            cache_capacity: DEFAULT_CAPACITY,
            page_size: 25,
            columns: 5,
            ffmpeg_program: "ffmpeg".to_string(),
            player_program: "/usr/bin/vlc".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Load settings from the default location, or defaults if no file exists
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: GalleryConfig = serde_json::from_str(&json)?;
        config.validate()?;

        println!("⚙️  Loaded settings from: {}", path.display());
        Ok(config)
    }

    /// Get the path where the settings file is expected
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("video-gallery");
        path.push("config.json");
        Some(path)
    }

    /// Reject settings the gallery cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(GalleryError::InvalidConfig(
                "cache_capacity must be at least 1".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(GalleryError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.columns == 0 {
            return Err(GalleryError::InvalidConfig(
                "columns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.cache_capacity, 5);
        assert_eq!(config.page_size, 25);
        assert_eq!(config.columns, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "page_size": 10, "player_program": "mpv" }"#).unwrap();

        let config = GalleryConfig::load_from(&path).unwrap();

        assert_eq!(config.page_size, 10);
        assert_eq!(config.player_program, "mpv");
        assert_eq!(config.cache_capacity, 5);
        assert_eq!(config.database_path, PathBuf::from("videos.db"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "cache_capacity": 0 }"#).unwrap();

        let result = GalleryConfig::load_from(&path);
        assert!(matches!(result, Err(GalleryError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = GalleryConfig::load_from(&path);
        assert!(matches!(result, Err(GalleryError::ConfigParse(_))));
    }
}
