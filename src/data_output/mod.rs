// src/data_output/mod.rs

pub mod series_export;

// src/data_output/mod.rs
