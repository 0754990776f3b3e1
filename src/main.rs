//! psrec-plot CLI
//!
//! Renders CPU / RSS memory / thread-count charts from recordings made by
//! the psrec process monitor.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::{Path, PathBuf};

use psrec_plot::chart::ChartConfig;
use psrec_plot::commands::{execute_plot, text_summary, validate_args, PlotArgs};
use psrec_plot::normalize::normalize;
use psrec_plot::parser::parse_recording;
use psrec_plot::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, SCHEMA_VERSION};

/// psrec-plot - chart generation for psrec process recordings
#[derive(Parser, Debug)]
#[command(name = "psrec-plot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a chart from a recording
    Plot {
        /// Input file containing the raw data recording to plot
        input: PathBuf,

        /// Output path for the SVG chart
        #[arg(short, long, default_value = "plot.svg")]
        output: PathBuf,

        /// Also export the normalized recording as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Plot the recorded values in a combined single panel
        #[arg(long)]
        combined: bool,

        /// Plot the values as solid areas, rather than line plots
        #[arg(long)]
        areaplot: bool,

        /// Draw vertical grid lines for the time axis
        #[arg(long)]
        verticalgrid: bool,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: u32,

        /// Chart height in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
        height: u32,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Print a text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Print a summary of a recording
    Info {
        /// Recording file to inspect
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Plot {
            input,
            output,
            json,
            combined,
            areaplot,
            verticalgrid,
            width,
            height,
            title,
            summary,
        } => {
            let mut chart_config = ChartConfig::new()
                .with_size(width, height)
                .with_area(areaplot)
                .with_vertical_grid(verticalgrid);

            if let Some(title) = title {
                chart_config = chart_config.with_title(title);
            }

            let args = PlotArgs {
                input,
                output_svg: output,
                output_json: json,
                combined,
                chart_config,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_plot(args)?;
        }

        Commands::Info { file } => {
            display_info(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Parse a recording and print its summary
///
/// **Private** - internal command implementation
fn display_info(file: &Path) -> Result<()> {
    println!("Recording: {}", file.display());

    let recording = normalize(parse_recording(file)?);
    print!("{}", text_summary(&recording));

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("psrec-plot v{}", env!("CARGO_PKG_VERSION"));
    println!("JSON export schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Chart generation for psrec process recordings.");
}
