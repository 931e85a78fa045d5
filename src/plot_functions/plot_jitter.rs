// src/plot_functions/plot_jitter.rs

use log::{info, warn};
use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_COMMAND_DELAY, COLOR_COMMAND_JITTER, COLOR_STATUS_JITTER, DELAY_Y_RANGE_MS,
    JITTER_Y_RANGE_MS, LINE_WIDTH_PLOT, MS_PER_S, TRAJECTORY_TIME_WINDOW_S,
};
use crate::data_analysis::jitter_analysis::JitterAnalysis;
use crate::plot_framework::{draw_split_figure, PlotConfig, PlotSeries};

const X_LABEL: &str = "Traj. Time [s]";

fn time_series_config(
    title: &str,
    y_label: &str,
    y_range: (f64, f64),
    series: PlotSeries,
) -> PlotConfig {
    PlotConfig {
        title: title.to_string(),
        x_range: TRAJECTORY_TIME_WINDOW_S.0..TRAJECTORY_TIME_WINDOW_S.1,
        y_range: y_range.0..y_range.1,
        series: vec![series],
        x_label: X_LABEL.to_string(),
        y_label: y_label.to_string(),
    }
}

/// Builds the three panel configs for one capture: status jitter, command
/// jitter and command delay, all in milliseconds.
pub fn jitter_plot_configs(analysis: &JitterAnalysis) -> [PlotConfig; 3] {
    let status_ms = analysis.status_jitter.scaled(MS_PER_S);
    let command_ms = analysis.command_jitter.scaled(MS_PER_S);
    let delay_ms: Vec<(f64, f64)> = analysis
        .command_delay
        .points
        .iter()
        .map(|&(t, d)| (t, d * MS_PER_S))
        .collect();

    [
        time_series_config(
            "Status Frame Jitter",
            "Jitter [ms]",
            JITTER_Y_RANGE_MS,
            PlotSeries {
                data: status_ms.points,
                label: "arm -> host".to_string(),
                color: *COLOR_STATUS_JITTER,
                stroke_width: LINE_WIDTH_PLOT,
            },
        ),
        time_series_config(
            "Command Frame Jitter",
            "Jitter [ms]",
            JITTER_Y_RANGE_MS,
            PlotSeries {
                data: command_ms.points,
                label: "host -> arm".to_string(),
                color: *COLOR_COMMAND_JITTER,
                stroke_width: LINE_WIDTH_PLOT,
            },
        ),
        time_series_config(
            "Command Frame Delay",
            "Delay [ms]",
            DELAY_Y_RANGE_MS,
            PlotSeries {
                data: delay_ms,
                label: "command - status".to_string(),
                color: *COLOR_COMMAND_DELAY,
                stroke_width: LINE_WIDTH_PLOT,
            },
        ),
    ]
}

/// Renders the jitter figure for one capture to `output_path`.
pub fn plot_jitter(
    analysis: &JitterAnalysis,
    capture_name: &str,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let [status, command, delay] = jitter_plot_configs(analysis);
    let any_plotted = draw_split_figure(output_path, capture_name, &status, &command, &delay)?;

    if any_plotted {
        info!("  Jitter plot written to '{}'.", output_path.display());
    } else {
        warn!(
            "  '{}' has no link frames to plot, only placeholder messages shown.",
            output_path.display()
        );
    }
    Ok(())
}


// src/plot_functions/plot_jitter.rs
