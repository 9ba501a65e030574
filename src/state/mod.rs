/// State management module
///
/// This module handles all application state, including:
/// - The video catalog database (catalog.rs)
/// - Shared data structures (data.rs)
/// - Search results, pagination and rendered cells (gallery.rs)

pub mod catalog;
pub mod data;
pub mod gallery;
