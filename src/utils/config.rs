//! Configuration and constants for the CLI.

/// Current JSON export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Bytes per megabyte; raw RSS values are recorded in bytes
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Megabytes per gigabyte, for the second rescaling step
pub const MB_PER_GB: f64 = 1024.0;

/// RSS threshold (in MB) above which the whole recording is shown in GB
pub const RSS_GB_THRESHOLD_MB: f64 = 4000.0;

/// Recording length (in seconds) above which times are shown in minutes
pub const TIME_MINUTES_THRESHOLD_SECS: f64 = 60.0 * 5.0;

/// Recording length (in seconds) above which times are shown in hours
pub const TIME_HOURS_THRESHOLD_SECS: f64 = 60.0 * 60.0 * 5.0;

// CPU percentages are per-core, so 100.0 is one full core. Values a little
// over 100 can still be normalised data with sampling jitter, hence the
// tolerance above the 100% ceiling.
pub const CPU_ABSOLUTE_THRESHOLD: f64 = 102.0;

// Metadata directive comment lines look like "#@ key: value"
pub const METADATA_KEY_CPU_TYPE: &str = "cputype";
pub const METADATA_KEY_SYS_THREADS: &str = "systhreads";

/// Default chart width in pixels
pub const DEFAULT_CHART_WIDTH: u32 = 1500;

/// Default chart height in pixels
pub const DEFAULT_CHART_HEIGHT: u32 = 800;
