use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{GalleryError, Result};

/// Bounding box of generated thumbnails
pub const THUMBNAIL_WIDTH: u32 = 160;
pub const THUMBNAIL_HEIGHT: u32 = 90;

/// Timestamp the thumbnail frame is taken from
pub const SEEK_OFFSET: &str = "00:00:01.000";

/// Source of encoded still frames for a video
pub trait FrameExtractor {
    /// Return one encoded frame (PNG, JPEG, ...) taken from `video_path`
    fn extract_frame(&self, video_path: &Path) -> Result<Vec<u8>>;
}

/// Extracts frames by running ffmpeg and reading a PNG from its stdout
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: String,
}

impl Ffmpeg {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl FrameExtractor for Ffmpeg {
    fn extract_frame(&self, video_path: &Path) -> Result<Vec<u8>> {
        let output = Command::new(&self.program)
            .arg("-i")
            .arg(video_path)
            .args([
                "-ss", SEEK_OFFSET,
                "-vframes", "1",
                "-f", "image2pipe",
                "-vcodec", "png",
                "pipe:1",
            ])
            .stdin(Stdio::null())
            .output()?;

        let path = video_path.display().to_string();

        if !output.status.success() {
            return Err(GalleryError::Extraction {
                path,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if output.stdout.is_empty() {
            return Err(GalleryError::EmptyFrame { path });
        }

        Ok(output.stdout)
    }
}

/// A decoded, downscaled frame ready for display
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

/// Decode an encoded frame and shrink it to fit the thumbnail box.
/// Aspect ratio is preserved and smaller frames are never enlarged.
pub fn decode_thumbnail(data: &[u8]) -> Result<Thumbnail> {
    let img = image::load_from_memory(data)?;

    let img = if img.width() > THUMBNAIL_WIDTH || img.height() > THUMBNAIL_HEIGHT {
        img.resize(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Thumbnail {
        width,
        height,
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
    })
}
