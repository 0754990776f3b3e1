//! psrec-plot
//!
//! Chart generation for recordings made by the psrec process monitor.
//!
//! Reads the CSV-like recording files psrec writes (per-sample elapsed
//! time, CPU usage, RSS, and optionally thread count, plus `#@` metadata
//! comments), resolves display units, and renders SVG time-series charts.
//!
//! This crate provides the core implementation for the `psrec-plot` CLI
//! tool.

pub mod chart;
pub mod commands;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod utils;
