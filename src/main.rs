// src/main.rs

use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;

use udp_jitter_render::config::RenderConfig;
use udp_jitter_render::constants::{
    DEFAULT_ARM_ADDRESS, DEFAULT_DATA_DIR, DEFAULT_FIGURE_DIR, DEFAULT_HOST_ADDRESS,
};
use udp_jitter_render::data_analysis::frame_filter::LinkEndpoints;
use udp_jitter_render::pipeline;

/// Plot UDP status/command frame jitter and command delay from Wireshark CSV exports.
#[derive(Parser, Debug)]
#[command(name = "udp_jitter_render")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Location of data files. Default './data'
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Location to store generated figures. Default './figures'
    #[arg(long, value_name = "DIR")]
    figure_dir: Option<PathBuf>,

    /// Don't show the figures
    #[arg(long)]
    hide: bool,

    /// Save the figures
    #[arg(long)]
    save: bool,

    /// Also write the computed series as CSV into the figure directory
    #[arg(long)]
    export_csv: bool,

    /// Address of the arm (source of status frames)
    #[arg(long, value_name = "ADDR", default_value = DEFAULT_ARM_ADDRESS)]
    arm_address: String,

    /// Address of the host controller (source of command frames)
    #[arg(long, value_name = "ADDR", default_value = DEFAULT_HOST_ADDRESS)]
    host_address: String,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let cwd = std::env::current_dir()?;
    let config = RenderConfig::new(
        cli.data_dir.unwrap_or_else(|| cwd.join(DEFAULT_DATA_DIR)),
        cli.figure_dir.unwrap_or_else(|| cwd.join(DEFAULT_FIGURE_DIR)),
        cli.save,
        !cli.hide,
        cli.export_csv,
        LinkEndpoints {
            arm: cli.arm_address,
            host: cli.host_address,
        },
    )?;

    info!(
        "udp_jitter_render {} reading '{}'",
        udp_jitter_render::crate_version(),
        config.data_dir.display()
    );
    let processed = pipeline::run(&config)?;
    info!("Processed {processed} capture(s).");
    Ok(())
}

// src/main.rs
