// src/data_output/series_export.rs

use csv::Writer;
use std::io::Write;
use std::path::Path;

use crate::constants::MS_PER_S;
use crate::data_analysis::jitter_analysis::JitterAnalysis;
use crate::error::JitterError;

pub const EXPORT_HEADER: [&str; 3] = ["series", "time_s", "value_ms"];

/// Writes the three computed series as long-format CSV.
pub fn write_analysis_csv<W: Write>(
    analysis: &JitterAnalysis,
    writer: W,
) -> Result<(), JitterError> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADER)?;

    let sections: [(&str, &[(f64, f64)]); 3] = [
        ("status_jitter", &analysis.status_jitter.points),
        ("command_jitter", &analysis.command_jitter.points),
        ("command_delay", &analysis.command_delay.points),
    ];
    for (name, points) in sections {
        for &(time, value) in points {
            wtr.write_record([
                name.to_string(),
                format!("{time:.9}"),
                format!("{:.6}", value * MS_PER_S),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_analysis_csv(analysis: &JitterAnalysis, path: &Path) -> Result<(), JitterError> {
    let file = std::fs::File::create(path)?;
    write_analysis_csv(analysis, file)
}


// src/data_output/series_export.rs
