//! Unit inference heuristics.
//!
//! Each inference is a pure function of the aggregates computed during
//! parsing, so the thresholds can be tested independently of any I/O.

use crate::parser::schema::{CpuType, RssUnit, TimeUnit};
use crate::utils::config::{
    CPU_ABSOLUTE_THRESHOLD, RSS_GB_THRESHOLD_MB, TIME_HOURS_THRESHOLD_SECS,
    TIME_MINUTES_THRESHOLD_SECS,
};

/// Choose the time axis unit from the last sample's elapsed seconds.
pub fn infer_time_unit(last_time_secs: f64) -> TimeUnit {
    if last_time_secs > TIME_HOURS_THRESHOLD_SECS {
        TimeUnit::Hours
    } else if last_time_secs > TIME_MINUTES_THRESHOLD_SECS {
        TimeUnit::Minutes
    } else {
        TimeUnit::Seconds
    }
}

/// Choose the RSS unit from the largest RSS value seen, in MB.
pub fn infer_rss_unit(max_rss_mb: f64) -> RssUnit {
    if max_rss_mb > RSS_GB_THRESHOLD_MB {
        RssUnit::Gigabytes
    } else {
        RssUnit::Megabytes
    }
}

/// Resolve how CPU values should be interpreted.
///
/// An explicit metadata hint is authoritative; otherwise values above the
/// normalised ceiling (with tolerance for rounding) indicate absolute data.
pub fn resolve_cpu_type(hint: Option<CpuType>, max_cpu_value: f64) -> CpuType {
    match hint {
        Some(cpu_type) => cpu_type,
        None if max_cpu_value > CPU_ABSOLUTE_THRESHOLD => CpuType::Absolute,
        None => CpuType::Normalised,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_unit_thresholds() {
        assert_eq!(infer_time_unit(0.0), TimeUnit::Seconds);
        assert_eq!(infer_time_unit(300.0), TimeUnit::Seconds);
        assert_eq!(infer_time_unit(300.1), TimeUnit::Minutes);
        assert_eq!(infer_time_unit(18000.0), TimeUnit::Minutes);
        assert_eq!(infer_time_unit(18000.1), TimeUnit::Hours);
    }

    #[test]
    fn rss_unit_threshold() {
        assert_eq!(infer_rss_unit(0.0), RssUnit::Megabytes);
        assert_eq!(infer_rss_unit(4000.0), RssUnit::Megabytes);
        assert_eq!(infer_rss_unit(4000.1), RssUnit::Gigabytes);
    }

    #[test]
    fn metadata_hint_is_authoritative() {
        assert_eq!(
            resolve_cpu_type(Some(CpuType::Absolute), 50.0),
            CpuType::Absolute
        );
        assert_eq!(
            resolve_cpu_type(Some(CpuType::Normalised), 700.0),
            CpuType::Normalised
        );
    }

    #[test]
    fn cpu_type_inferred_from_maximum() {
        assert_eq!(resolve_cpu_type(None, 87.0), CpuType::Normalised);
        assert_eq!(resolve_cpu_type(None, 102.0), CpuType::Normalised);
        assert_eq!(resolve_cpu_type(None, 150.0), CpuType::Absolute);
    }
}
