// src/pipeline.rs

use log::{info, warn};
use std::error::Error;
use std::path::Path;

use crate::config::RenderConfig;
use crate::data_analysis::differencer::DifferentialSeries;
use crate::data_analysis::frame_filter::{split_link_frames, LinkEndpoints};
use crate::data_analysis::jitter_analysis::{analyse_link, JitterAnalysis, JitterStats};
use crate::data_input::capture_data::Capture;
use crate::data_input::capture_dir::{discover_captures, CaptureFile};
use crate::data_input::capture_parser::parse_capture_file;
use crate::data_output::series_export::export_analysis_csv;
use crate::error::JitterError;
use crate::plot_functions::plot_jitter::plot_jitter;
use crate::viewer::show_figure;

fn log_stats(capture_name: &str, label: &str, series: &DifferentialSeries) {
    match JitterStats::from_series(series) {
        Some(stats) => info!(
            "  {capture_name} {label}: n={} mean={:.3} ms std={:.3} ms min={:.3} ms max={:.3} ms",
            stats.count,
            stats.mean * 1000.0,
            stats.std_dev * 1000.0,
            stats.min * 1000.0,
            stats.max * 1000.0
        ),
        None => warn!("  {capture_name} {label}: not enough frames for jitter"),
    }
}

/// Filters one parsed capture into link frames and computes its jitter.
pub fn analyse_capture(capture: &Capture, endpoints: &LinkEndpoints) -> JitterAnalysis {
    let frames = split_link_frames(&capture.rows, endpoints);
    info!(
        "  {}: {} status frames, {} command frames",
        capture.name,
        frames.status.len(),
        frames.command.len()
    );

    let analysis = analyse_link(&frames);
    log_stats(&capture.name, "status jitter", &analysis.status_jitter);
    log_stats(&capture.name, "command jitter", &analysis.command_jitter);
    analysis
}

/// Parses a capture file and analyses it.
pub fn load_and_analyse(
    path: &Path,
    endpoints: &LinkEndpoints,
) -> Result<(Capture, JitterAnalysis), JitterError> {
    let capture = parse_capture_file(path)?;
    let analysis = analyse_capture(&capture, endpoints);
    Ok((capture, analysis))
}

fn process_capture(
    file: &CaptureFile,
    config: &RenderConfig,
    scratch_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let (capture, analysis) = load_and_analyse(&file.path, &config.endpoints)?;
    info!(
        "Loaded capture '{}' from '{}'",
        capture.name,
        capture.path.display()
    );

    if config.export_csv {
        let export_path = config.export_path(&capture.name);
        export_analysis_csv(&analysis, &export_path)?;
        info!("  Series exported to '{}'.", export_path.display());
    }

    if config.renders_figures() {
        let figure_path = config.figure_path(&capture.name, scratch_dir);
        plot_jitter(&analysis, &capture.name, &figure_path)?;
        if config.show {
            show_figure(&figure_path);
        }
    }
    Ok(())
}

/// Processes every capture in the data directory. Stops at the first error.
///
/// Figures that are shown but not saved live in a scratch directory that is
/// removed when the run ends. Returns the number of captures processed.
pub fn run(config: &RenderConfig) -> Result<usize, Box<dyn Error>> {
    let captures = discover_captures(&config.data_dir)?;
    config.prepare_output_dir()?;

    let scratch = tempfile::Builder::new()
        .prefix("udp_jitter_render")
        .tempdir()?;
    for file in &captures {
        process_capture(file, config, scratch.path())?;
    }
    Ok(captures.len())
}

// src/pipeline.rs
