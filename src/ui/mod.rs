/// View builders for the gallery window
pub mod details;
pub mod grid;
