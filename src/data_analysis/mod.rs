// src/data_analysis/mod.rs

pub mod differencer;
pub mod frame_filter;
pub mod jitter_analysis;

// src/data_analysis/mod.rs
