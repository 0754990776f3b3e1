//! Separate stacked-panel chart: CPU, RSS, and optionally thread count.

use super::{
    cpu_axis_label, cpu_axis_max, rss_axis_label, time_axis_label, to_chart_error, ChartConfig,
    CPU_SERIES_COLOUR, GRID_COLOUR, RSS_SERIES_COLOUR, THREADS_SERIES_COLOUR,
};
use crate::parser::schema::Recording;
use crate::utils::error::ChartError;
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Render the recording as vertically stacked panels.
///
/// The thread-count panel is only added when every sample carries a thread
/// count; all panels share the same time range.
///
/// # Errors
/// * `ChartError::EmptyRecording` - no samples to plot
/// * `ChartError::Backend` - the plotting backend failed
pub fn render_separate(recording: &Recording, config: &ChartConfig) -> Result<String, ChartError> {
    if recording.samples.is_empty() {
        return Err(ChartError::EmptyRecording);
    }

    let with_threads = recording.has_thread_counts;
    let panel_count = if with_threads { 3 } else { 2 };

    info!(
        "Rendering separate chart ({} samples, {} panels)",
        recording.samples.len(),
        panel_count
    );

    let title = config.title.clone().unwrap_or_else(|| {
        if with_threads {
            "Process recording (CPU usage, RSS memory usage and Thread Count)".to_string()
        } else {
            "Process recording (CPU usage and RSS memory usage)".to_string()
        }
    });

    let x_max = recording.duration().max(1.0);
    let time_label = time_axis_label(recording);

    let cpu_points: Vec<(f64, f64)> = recording.samples.iter().map(|s| (s.time, s.cpu)).collect();
    let rss_points: Vec<(f64, f64)> = recording.samples.iter().map(|s| (s.time, s.rss)).collect();

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        let root = root
            .titled(&title, ("sans-serif", 24))
            .map_err(to_chart_error)?;

        let panels = root.split_evenly((panel_count, 1));

        draw_panel(
            &panels[0],
            config,
            &cpu_points,
            x_max,
            cpu_axis_max(recording),
            &time_label,
            &cpu_axis_label(recording),
            CPU_SERIES_COLOUR,
        )?;

        draw_panel(
            &panels[1],
            config,
            &rss_points,
            x_max,
            recording.peak_rss().max(1.0),
            &time_label,
            &rss_axis_label(recording),
            RSS_SERIES_COLOUR,
        )?;

        if with_threads {
            let thread_points: Vec<(f64, f64)> = recording
                .samples
                .iter()
                .filter_map(|s| s.thread_count.map(|t| (s.time, f64::from(t))))
                .collect();
            let y_max = thread_points
                .iter()
                .map(|p| p.1)
                .fold(0.0, f64::max)
                .max(1.0);

            draw_panel(
                &panels[2],
                config,
                &thread_points,
                x_max,
                y_max,
                &time_label,
                "Active Thread Count",
                THREADS_SERIES_COLOUR,
            )?;
        }

        root.present().map_err(to_chart_error)?;
    }

    Ok(buffer)
}

#[allow(clippy::too_many_arguments)]
fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    config: &ChartConfig,
    points: &[(f64, f64)],
    x_max: f64,
    y_max: f64,
    x_desc: &str,
    y_desc: &str,
    colour: RGBColor,
) -> Result<(), ChartError> {
    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .x_label_area_size(35)
        .y_label_area_size(65)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(to_chart_error)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(x_desc)
            .y_desc(y_desc)
            .light_line_style(GRID_COLOUR.mix(0.4))
            .bold_line_style(GRID_COLOUR);
        if !config.vertical_grid {
            mesh.disable_x_mesh();
        }
        mesh.draw().map_err(to_chart_error)?;
    }

    if config.area {
        chart
            .draw_series(AreaSeries::new(
                points.iter().copied(),
                0.0,
                colour.mix(0.7),
            ))
            .map_err(to_chart_error)?;
    } else {
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &colour))
            .map_err(to_chart_error)?;
    }

    Ok(())
}
