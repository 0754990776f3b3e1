//! Metadata directive handling.
//!
//! The recorder can embed hints in comment lines of the form `#@ key: value`.
//! Directives may appear anywhere in the file and are cumulative; the last
//! occurrence of a key wins.

use crate::parser::schema::CpuType;
use crate::utils::config::{METADATA_KEY_CPU_TYPE, METADATA_KEY_SYS_THREADS};
use log::{debug, warn};

/// Hints collected from `#@` comment lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordingMetadata {
    /// Explicit CPU interpretation; overrides the inference heuristic
    pub cpu_type: Option<CpuType>,

    /// Total system thread count reported by the recorder
    pub system_thread_count: Option<u32>,
}

impl RecordingMetadata {
    /// Apply one directive body (the text after the `#@ ` prefix).
    ///
    /// Unrecognized keys are ignored; recognized keys with unusable values
    /// are reported via a warning and left unset.
    pub fn apply_directive(&mut self, body: &str) {
        let mut parts = body.splitn(2, ':');
        let key = parts.next().unwrap_or("").trim();
        let value = parts.next().unwrap_or("").trim();

        match key {
            METADATA_KEY_CPU_TYPE => match value {
                "normalised" => self.cpu_type = Some(CpuType::Normalised),
                "absolute" => self.cpu_type = Some(CpuType::Absolute),
                other => warn!("Unrecognised cputype value '{}', ignoring", other),
            },
            METADATA_KEY_SYS_THREADS => match value.parse::<u32>() {
                Ok(count) => self.system_thread_count = Some(count),
                Err(_) => warn!("Unrecognised systhreads value '{}', ignoring", value),
            },
            other => debug!("Ignoring unknown metadata key '{}'", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cputype_directive() {
        let mut meta = RecordingMetadata::default();
        meta.apply_directive("cputype: absolute");
        assert_eq!(meta.cpu_type, Some(CpuType::Absolute));

        meta.apply_directive("cputype: normalised");
        assert_eq!(meta.cpu_type, Some(CpuType::Normalised));
    }

    #[test]
    fn systhreads_directive() {
        let mut meta = RecordingMetadata::default();
        meta.apply_directive("systhreads: 8");
        assert_eq!(meta.system_thread_count, Some(8));
    }

    #[test]
    fn last_directive_wins() {
        let mut meta = RecordingMetadata::default();
        meta.apply_directive("systhreads: 4");
        meta.apply_directive("systhreads: 16");
        assert_eq!(meta.system_thread_count, Some(16));
    }

    #[test]
    fn unrecognised_value_leaves_field_unset() {
        let mut meta = RecordingMetadata::default();
        meta.apply_directive("cputype: sideways");
        assert_eq!(meta.cpu_type, None);

        meta.apply_directive("systhreads: lots");
        assert_eq!(meta.system_thread_count, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut meta = RecordingMetadata::default();
        meta.apply_directive("hostname: box1");
        assert_eq!(meta, RecordingMetadata::default());
    }

    #[test]
    fn missing_colon_is_harmless() {
        let mut meta = RecordingMetadata::default();
        meta.apply_directive("cputype");
        assert_eq!(meta.cpu_type, None);
    }
}
