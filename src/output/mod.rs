//! Output writers for chart SVGs and JSON exports.

pub mod json;
pub mod svg;

// Re-export main functions
pub use json::{read_document, write_document};
pub use svg::write_svg;
