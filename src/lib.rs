// src/lib.rs - Library interface for internal module access

pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod data_output;
pub mod error;
pub mod pipeline;
pub mod plot_framework;
pub mod plot_functions;
pub mod viewer;

pub use error::JitterError;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
