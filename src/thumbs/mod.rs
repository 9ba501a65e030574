/// Thumbnail module
///
/// This module handles:
/// - Extracting a still frame from a video with an external tool
/// - Decoding and downscaling it to thumbnail size
/// - Keeping a bounded set of decoded thumbnails in memory

pub mod cache;
pub mod extract;

pub use cache::ThumbnailCache;
pub use extract::{Ffmpeg, FrameExtractor, Thumbnail};
