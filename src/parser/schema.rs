//! Data model and export schema for recordings.
//!
//! An explicit, typed model rather than loosely-keyed maps: every consumer's
//! dependency on a field is visible and checked at compile time.

use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single measurement row from a recording.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Elapsed time; seconds as recorded, rescaled after normalization
    pub time: f64,

    /// CPU usage percentage (100.0 = one full core)
    pub cpu: f64,

    /// Resident set size in MB as parsed, rescaled after normalization
    pub rss: f64,

    /// Thread count, when the recorder captured one for this row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_count: Option<u32>,
}

/// Display unit for the time axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    /// Factor raw second values are divided by for this unit
    pub fn divisor(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3600.0,
        }
    }

    /// Axis label text
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Hours => "Hours",
        }
    }
}

/// Display unit for RSS memory values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RssUnit {
    #[serde(rename = "mb")]
    Megabytes,
    #[serde(rename = "gb")]
    Gigabytes,
}

impl RssUnit {
    /// Factor MB values are divided by for this unit
    pub fn divisor(self) -> f64 {
        match self {
            RssUnit::Megabytes => 1.0,
            RssUnit::Gigabytes => 1024.0,
        }
    }

    /// Axis label text
    pub fn label(self) -> &'static str {
        match self {
            RssUnit::Megabytes => "MB",
            RssUnit::Gigabytes => "GB",
        }
    }
}

/// How CPU percentages should be interpreted.
///
/// Normalised values top out at 100% (one core); absolute values may
/// exceed 100% when the process uses multiple cores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpuType {
    Normalised,
    Absolute,
}

impl fmt::Display for CpuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CpuType::Normalised => "normalised",
            CpuType::Absolute => "absolute",
        })
    }
}

/// A fully normalized recording, ready for rendering or export.
///
/// Built once per invocation and not mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    /// Samples in recorded order, with time and RSS in the resolved units
    pub samples: Vec<Sample>,

    pub time_unit: TimeUnit,

    pub rss_unit: RssUnit,

    pub cpu_type: CpuType,

    /// Maximum CPU value observed, in raw (unscaled) percent
    pub max_cpu_value: f64,

    /// True when every sample carries a thread count
    pub has_thread_counts: bool,

    /// System thread count hint from metadata, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_thread_count: Option<u32>,
}

impl Recording {
    /// Elapsed time of the last sample, in the resolved time unit
    pub fn duration(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time)
    }

    /// Largest RSS value, in the resolved RSS unit
    pub fn peak_rss(&self) -> f64 {
        self.samples.iter().map(|s| s.rss).fold(0.0, f64::max)
    }
}

/// Envelope for the JSON export of a recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingDocument {
    /// Export schema version
    pub version: String,

    /// RFC 3339 timestamp of when the export was generated
    pub generated_at: String,

    #[serde(flatten)]
    pub recording: Recording,
}

impl RecordingDocument {
    pub fn new(recording: Recording) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            recording,
        }
    }
}
