// src/data_input/capture_data.rs

use std::path::PathBuf;

/// Structure to hold data parsed from a single row of a Wireshark CSV export.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CaptureRow {
    pub time_sec: f64,            // Seconds since the first captured packet.
    pub source: String,           // Source address.
    pub destination: String,      // Destination address.
    pub protocol: Option<String>, // e.g. "UDP"; absent if the column is missing.
    pub length: Option<u32>,      // Frame length in bytes.
}

/// A parsed capture file.
#[derive(Debug, Clone)]
pub struct Capture {
    pub name: String,
    pub path: PathBuf,
    pub rows: Vec<CaptureRow>,
}

// src/data_input/capture_data.rs
