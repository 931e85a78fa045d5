// src/constants.rs

use plotters::style::colors::full_palette::{BLUE, ORANGE, PURPLE};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 28;
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Default link endpoints (arm controller board and ROS2 host).
pub const DEFAULT_ARM_ADDRESS: &str = "192.168.38.1";
pub const DEFAULT_HOST_ADDRESS: &str = "192.168.38.11";

// Default directories, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_FIGURE_DIR: &str = "figures";

// Wireshark CSV export headers.
pub const HEADER_TIME: &str = "Time";
pub const HEADER_SOURCE: &str = "Source";
pub const HEADER_DESTINATION: &str = "Destination";
pub const HEADER_PROTOCOL: &str = "Protocol";
pub const HEADER_LENGTH: &str = "Length";

// Seconds to milliseconds for jitter and delay axes.
pub const MS_PER_S: f64 = 1000.0;

// Axis windows. Trajectories run for roughly 20 s.
pub const TRAJECTORY_TIME_WINDOW_S: (f64, f64) = (0.0, 20.0);
pub const JITTER_Y_RANGE_MS: (f64, f64) = (0.0, 8.0);
pub const DELAY_Y_RANGE_MS: (f64, f64) = (0.0, 0.6);

// --- Plot Color Assignments ---
pub const COLOR_STATUS_JITTER: &RGBColor = &BLUE;
pub const COLOR_COMMAND_JITTER: &RGBColor = &ORANGE;
pub const COLOR_COMMAND_DELAY: &RGBColor = &PURPLE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// src/constants.rs
