// src/data_input/mod.rs

pub mod capture_data;
pub mod capture_dir;
pub mod capture_parser;

// src/data_input/mod.rs
