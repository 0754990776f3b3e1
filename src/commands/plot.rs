//! Plot command implementation.
//!
//! The plot command:
//! 1. Parses the recording file
//! 2. Normalizes units
//! 3. Renders the chart
//! 4. Writes output files

use crate::chart::{render_combined, render_separate, ChartConfig};
use crate::normalize::normalize;
use crate::output::{write_document, write_svg};
use crate::parser::recording::parse_recording;
use crate::parser::schema::{Recording, RecordingDocument};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Arguments for the plot command
#[derive(Debug, Clone)]
pub struct PlotArgs {
    /// Input recording file
    pub input: PathBuf,

    /// Output path for the SVG chart
    pub output_svg: PathBuf,

    /// Optional output path for the normalized JSON export
    pub output_json: Option<PathBuf>,

    /// Use the combined single-panel layout instead of stacked panels
    pub combined: bool,

    /// Chart configuration
    pub chart_config: ChartConfig,

    /// Print a text summary to stdout
    pub print_summary: bool,
}

impl Default for PlotArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_svg: PathBuf::from("plot.svg"),
            output_json: None,
            combined: false,
            chart_config: ChartConfig::default(),
            print_summary: false,
        }
    }
}

/// Validate plot arguments before execution.
pub fn validate_args(args: &PlotArgs) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("input file does not exist: {}", args.input.display());
    }

    if args.chart_config.width == 0 || args.chart_config.height == 0 {
        anyhow::bail!("chart dimensions must be non-zero");
    }

    Ok(())
}

/// Execute the plot command.
///
/// # Errors
/// * Recording parse errors (malformed fields are fatal)
/// * Chart rendering errors (e.g. an empty recording)
/// * File write errors
pub fn execute_plot(args: PlotArgs) -> Result<()> {
    info!("Plotting recording: {}", args.input.display());

    // Step 1: Parse the recording file
    let raw = parse_recording(&args.input).context("Failed to parse recording")?;
    debug!("Parsed {} samples", raw.samples.len());

    // Step 2: Normalize units
    let recording = normalize(raw);

    // Step 3: Render the chart
    let svg = if args.combined {
        render_combined(&recording, &args.chart_config)
    } else {
        render_separate(&recording, &args.chart_config)
    }
    .context("Failed to render chart")?;

    // Step 4: Write output files
    write_svg(&svg, &args.output_svg).context("Failed to write SVG")?;

    if let Some(json_path) = &args.output_json {
        let document = RecordingDocument::new(recording.clone());
        write_document(&document, json_path).context("Failed to write JSON export")?;
    }

    if args.print_summary {
        print!("{}", text_summary(&recording));
    }

    info!("Plot written to: {}", args.output_svg.display());

    Ok(())
}

/// Human-readable summary of a normalized recording.
pub fn text_summary(recording: &Recording) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "  Samples: {}", recording.samples.len());
    let _ = writeln!(
        out,
        "  Duration: {:.2} {}",
        recording.duration(),
        recording.time_unit.label()
    );
    let _ = writeln!(
        out,
        "  Peak RSS: {:.1} {}",
        recording.peak_rss(),
        recording.rss_unit.label()
    );
    let _ = writeln!(
        out,
        "  Max CPU: {:.1}% ({})",
        recording.max_cpu_value, recording.cpu_type
    );
    let _ = writeln!(
        out,
        "  Thread counts: {}",
        if recording.has_thread_counts {
            "yes"
        } else {
            "no"
        }
    );
    if let Some(count) = recording.system_thread_count {
        let _ = writeln!(out, "  System threads: {}", count);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{CpuType, RssUnit, Sample, TimeUnit};

    #[test]
    fn validate_rejects_missing_input() {
        let args = PlotArgs {
            input: PathBuf::from("/definitely/not/here.txt"),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn summary_names_units() {
        let recording = Recording {
            samples: vec![Sample {
                time: 2.0,
                cpu: 95.0,
                rss: 1.5,
                thread_count: None,
            }],
            time_unit: TimeUnit::Minutes,
            rss_unit: RssUnit::Gigabytes,
            cpu_type: CpuType::Normalised,
            max_cpu_value: 95.0,
            has_thread_counts: false,
            system_thread_count: Some(12),
        };

        let summary = text_summary(&recording);
        assert!(summary.contains("Duration: 2.00 Minutes"));
        assert!(summary.contains("Peak RSS: 1.5 GB"));
        assert!(summary.contains("Max CPU: 95.0% (normalised)"));
        assert!(summary.contains("System threads: 12"));
    }
}
