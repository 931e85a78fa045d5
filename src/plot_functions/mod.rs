// src/plot_functions/mod.rs

pub mod plot_jitter;

// src/plot_functions/mod.rs
