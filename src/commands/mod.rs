//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod plot;

// Re-export main command functions
pub use plot::{execute_plot, text_summary, validate_args, PlotArgs};
