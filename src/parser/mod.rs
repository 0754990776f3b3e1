//! Recording parsing and schema definitions.
//!
//! This module handles:
//! - Line-oriented parsing of psrec recording files
//! - `#@` metadata directive handling
//! - The typed recording data model and JSON export schema

pub mod metadata;
pub mod recording;
pub mod schema;

// Re-export main types
pub use metadata::RecordingMetadata;
pub use recording::{parse_recording, parse_recording_from, RawRecording};
pub use schema::{CpuType, Recording, RecordingDocument, RssUnit, Sample, TimeUnit};
