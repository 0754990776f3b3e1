//! Combined single-panel chart with dual y-axes.

use super::{
    cpu_axis_label, cpu_axis_max, rss_axis_label, time_axis_label, to_chart_error, ChartConfig,
    CPU_AXIS_COLOUR, CPU_SERIES_COLOUR, GRID_COLOUR, RSS_AXIS_COLOUR, RSS_SERIES_COLOUR,
};
use crate::parser::schema::Recording;
use crate::utils::error::ChartError;
use log::info;
use plotters::prelude::*;

const DEFAULT_TITLE: &str = "Process recording (CPU usage and RSS memory usage)";

/// Render CPU and RSS series into one panel, CPU on the left axis and RSS
/// on the right.
///
/// # Errors
/// * `ChartError::EmptyRecording` - no samples to plot
/// * `ChartError::Backend` - the plotting backend failed
pub fn render_combined(recording: &Recording, config: &ChartConfig) -> Result<String, ChartError> {
    if recording.samples.is_empty() {
        return Err(ChartError::EmptyRecording);
    }

    info!(
        "Rendering combined chart ({} samples)",
        recording.samples.len()
    );

    let title = config.title.as_deref().unwrap_or(DEFAULT_TITLE);

    let x_max = recording.duration().max(1.0);
    let cpu_max = cpu_axis_max(recording);
    let rss_max = recording.peak_rss().max(1.0);

    let cpu_points: Vec<(f64, f64)> = recording.samples.iter().map(|s| (s.time, s.cpu)).collect();
    let rss_points: Vec<(f64, f64)> = recording.samples.iter().map(|s| (s.time, s.rss)).collect();

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(45)
            .y_label_area_size(65)
            .right_y_label_area_size(65)
            .build_cartesian_2d(0.0..x_max, 0.0..cpu_max)
            .map_err(to_chart_error)?
            .set_secondary_coord(0.0..x_max, 0.0..rss_max);

        {
            let mut mesh = chart.configure_mesh();
            mesh.x_desc(time_axis_label(recording))
                .y_desc(cpu_axis_label(recording))
                .axis_desc_style(("sans-serif", 16).into_font().color(&CPU_AXIS_COLOUR))
                .light_line_style(GRID_COLOUR.mix(0.4))
                .bold_line_style(GRID_COLOUR);
            if !config.vertical_grid {
                mesh.disable_x_mesh();
            }
            mesh.draw().map_err(to_chart_error)?;
        }

        chart
            .configure_secondary_axes()
            .y_desc(rss_axis_label(recording))
            .axis_desc_style(("sans-serif", 16).into_font().color(&RSS_AXIS_COLOUR))
            .draw()
            .map_err(to_chart_error)?;

        if config.area {
            chart
                .draw_series(AreaSeries::new(
                    cpu_points.iter().copied(),
                    0.0,
                    CPU_SERIES_COLOUR.mix(0.6),
                ))
                .map_err(to_chart_error)?;
            chart
                .draw_secondary_series(AreaSeries::new(
                    rss_points.iter().copied(),
                    0.0,
                    RSS_SERIES_COLOUR.mix(0.6),
                ))
                .map_err(to_chart_error)?;
        } else {
            chart
                .draw_series(LineSeries::new(
                    cpu_points.iter().copied(),
                    &CPU_SERIES_COLOUR,
                ))
                .map_err(to_chart_error)?;
            chart
                .draw_secondary_series(LineSeries::new(
                    rss_points.iter().copied(),
                    &RSS_SERIES_COLOUR,
                ))
                .map_err(to_chart_error)?;
        }

        root.present().map_err(to_chart_error)?;
    }

    Ok(buffer)
}
