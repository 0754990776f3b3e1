//! SVG chart rendering for normalized recordings.
//!
//! Two layouts are supported: a combined single panel with CPU on the left
//! axis and RSS on the right, and separate stacked panels (CPU, RSS, and
//! thread count when present). Both render to an SVG string which the
//! output layer writes to disk.

pub mod combined;
pub mod separate;

pub use combined::render_combined;
pub use separate::render_separate;

use crate::parser::schema::{CpuType, Recording};
use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use crate::utils::error::ChartError;
use plotters::style::RGBColor;

// Series colours match the original psrec plots: blue CPU, red RSS, green
// thread count. Axis labels use darker shades so no legend is needed.
pub(crate) const CPU_SERIES_COLOUR: RGBColor = RGBColor(0x00, 0x00, 0xff);
pub(crate) const CPU_AXIS_COLOUR: RGBColor = RGBColor(0x00, 0x00, 0xbf);
pub(crate) const RSS_SERIES_COLOUR: RGBColor = RGBColor(0xff, 0x00, 0x00);
pub(crate) const RSS_AXIS_COLOUR: RGBColor = RGBColor(0xbf, 0x00, 0x00);
pub(crate) const THREADS_SERIES_COLOUR: RGBColor = RGBColor(0x00, 0x80, 0x00);
pub(crate) const GRID_COLOUR: RGBColor = RGBColor(0xd3, 0xd3, 0xd3);

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Chart title; `None` selects a default based on the recording contents
    pub title: Option<String>,

    /// Chart width in pixels
    pub width: u32,

    /// Chart height in pixels
    pub height: u32,

    /// Draw filled areas instead of plain lines
    pub area: bool,

    /// Draw vertical gridlines for the time axis
    pub vertical_grid: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            area: false,
            vertical_grid: false,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_area(mut self, area: bool) -> Self {
        self.area = area;
        self
    }

    pub fn with_vertical_grid(mut self, vertical_grid: bool) -> Self {
        self.vertical_grid = vertical_grid;
        self
    }
}

pub(crate) fn to_chart_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Backend(err.to_string())
}

pub(crate) fn time_axis_label(recording: &Recording) -> String {
    format!("Time elapsed ({})", recording.time_unit.label())
}

pub(crate) fn cpu_axis_label(recording: &Recording) -> String {
    format!("CPU usage ({} %)", recording.cpu_type)
}

pub(crate) fn rss_axis_label(recording: &Recording) -> String {
    format!("Memory RSS ({})", recording.rss_unit.label())
}

/// Upper CPU axis limit: normalised data is clamped just above 100%,
/// absolute data scales to the observed maximum.
pub(crate) fn cpu_axis_max(recording: &Recording) -> f64 {
    match recording.cpu_type {
        CpuType::Normalised => 101.0,
        CpuType::Absolute => recording.max_cpu_value.max(1.0),
    }
}
