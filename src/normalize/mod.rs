//! Unit normalization of raw recordings.
//!
//! Converts the raw parse result into a [`Recording`] with display units
//! resolved and every sample rescaled accordingly. Units are chosen once
//! for the whole recording, never per sample.

pub mod units;

pub use units::{infer_rss_unit, infer_time_unit, resolve_cpu_type};

use crate::parser::recording::RawRecording;
use crate::parser::schema::{Recording, TimeUnit};
use log::debug;

/// Convert a raw parse result into a normalized [`Recording`].
///
/// Consumes the raw recording, so the rescale can only ever be applied once.
/// An empty recording keeps the default units (seconds, MB).
pub fn normalize(raw: RawRecording) -> Recording {
    let RawRecording {
        mut samples,
        metadata,
        max_cpu,
        max_rss_mb,
    } = raw;

    let time_unit = samples
        .last()
        .map_or(TimeUnit::Seconds, |s| infer_time_unit(s.time));
    let rss_unit = infer_rss_unit(max_rss_mb);

    let time_divisor = time_unit.divisor();
    let rss_divisor = rss_unit.divisor();
    if time_divisor != 1.0 || rss_divisor != 1.0 {
        for sample in &mut samples {
            sample.time /= time_divisor;
            sample.rss /= rss_divisor;
        }
    }

    let cpu_type = resolve_cpu_type(metadata.cpu_type, max_cpu);
    let has_thread_counts = !samples.is_empty() && samples.iter().all(|s| s.thread_count.is_some());

    debug!(
        "Normalized recording: {} samples, time in {}, rss in {}, cpu {}",
        samples.len(),
        time_unit.label(),
        rss_unit.label(),
        cpu_type
    );

    Recording {
        samples,
        time_unit,
        rss_unit,
        cpu_type,
        max_cpu_value: max_cpu,
        has_thread_counts,
        system_thread_count: metadata.system_thread_count,
    }
}
