//! Recording file parser.
//!
//! Reads the CSV-like output of the psrec recorder line by line in a single
//! pass, collecting samples plus the aggregates (max CPU, max RSS) that the
//! normalization step needs. Blank lines, plain comments, and comma-free
//! lines are tolerated and skipped; a malformed numeric field aborts the
//! whole parse.

use crate::parser::metadata::RecordingMetadata;
use crate::parser::schema::Sample;
use crate::utils::config::BYTES_PER_MB;
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Raw parse result, before unit normalization.
///
/// Times are in seconds as recorded; RSS values have already been converted
/// from bytes to MB during ingest.
#[derive(Debug, Clone, Default)]
pub struct RawRecording {
    /// Samples in recorded order
    pub samples: Vec<Sample>,

    /// Hints collected from `#@` directives
    pub metadata: RecordingMetadata,

    /// Running maximum CPU value, in percent
    pub max_cpu: f64,

    /// Running maximum RSS value, in MB
    pub max_rss_mb: f64,
}

/// Parse a recording file from disk.
///
/// The file handle is scoped to this call and released on every path,
/// including the abort path on a malformed field.
///
/// # Errors
/// * `ParseError::Io` - file cannot be opened or read
/// * `ParseError::TooFewFields` - a data row with fewer than three fields
/// * `ParseError::InvalidField` - a numeric field that fails to parse
pub fn parse_recording(path: impl AsRef<Path>) -> Result<RawRecording, ParseError> {
    let path = path.as_ref();
    debug!("Reading recording from: {}", path.display());

    let file = File::open(path)?;
    parse_recording_from(BufReader::new(file))
}

/// Parse a recording from any buffered reader.
pub fn parse_recording_from(reader: impl BufRead) -> Result<RawRecording, ParseError> {
    let mut recording = RawRecording::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        parse_line(&mut recording, line.trim_end(), index + 1)?;
    }

    debug!(
        "Parsed {} samples (max cpu {:.1}%, max rss {:.1} MB)",
        recording.samples.len(),
        recording.max_cpu,
        recording.max_rss_mb
    );

    Ok(recording)
}

/// Consume a single line, appending a sample or updating metadata.
fn parse_line(
    recording: &mut RawRecording,
    line: &str,
    line_number: usize,
) -> Result<(), ParseError> {
    if line.is_empty() {
        return Ok(());
    }

    if let Some(rest) = line.strip_prefix('#') {
        if rest.starts_with('@') {
            // "#@ key: value" - the directive body follows the 3-char prefix
            recording
                .metadata
                .apply_directive(line.get(3..).unwrap_or(""));
        }
        return Ok(());
    }

    if !line.contains(',') {
        debug!("line {}: no comma, skipping", line_number);
        return Ok(());
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 3 {
        return Err(ParseError::TooFewFields {
            line: line_number,
            found: fields.len(),
        });
    }

    let time = parse_float(fields[0], "time", line_number)?;
    let cpu = parse_float(fields[1], "cpu", line_number)?;
    let rss_bytes = parse_float(fields[2], "rss", line_number)?;

    recording.max_cpu = recording.max_cpu.max(cpu);

    let rss_mb = rss_bytes / BYTES_PER_MB;
    recording.max_rss_mb = recording.max_rss_mb.max(rss_mb);

    // Extra fields beyond the thread count are ignored
    let thread_count = match fields.get(3) {
        Some(value) => Some(parse_thread_count(value, line_number)?),
        None => None,
    };

    recording.samples.push(Sample {
        time,
        cpu,
        rss: rss_mb,
        thread_count,
    });

    Ok(())
}

fn parse_float(value: &str, field: &'static str, line: usize) -> Result<f64, ParseError> {
    let value = value.trim();
    value.parse::<f64>().map_err(|_| ParseError::InvalidField {
        line,
        field,
        value: value.to_string(),
    })
}

fn parse_thread_count(value: &str, line: usize) -> Result<u32, ParseError> {
    let value = value.trim();
    value.parse::<u32>().map_err(|_| ParseError::InvalidField {
        line,
        field: "thread count",
        value: value.to_string(),
    })
}
