// src/data_input/capture_parser.rs

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::constants::{
    HEADER_DESTINATION, HEADER_LENGTH, HEADER_PROTOCOL, HEADER_SOURCE, HEADER_TIME,
};
use crate::data_input::capture_data::{Capture, CaptureRow};
use crate::error::JitterError;

// Index positions into TARGET_HEADERS.
const IDX_TIME: usize = 0;
const IDX_SOURCE: usize = 1;
const IDX_DESTINATION: usize = 2;
const IDX_PROTOCOL: usize = 3;
const IDX_LENGTH: usize = 4;
const REQUIRED_HEADER_COUNT: usize = 3;

const TARGET_HEADERS: [&str; 5] = [
    HEADER_TIME,        // 0
    HEADER_SOURCE,      // 1
    HEADER_DESTINATION, // 2
    HEADER_PROTOCOL,    // 3 (optional)
    HEADER_LENGTH,      // 4 (optional)
];

fn field_at<'r>(
    record: &'r StringRecord,
    header_indices: &[Option<usize>],
    target_idx: usize,
) -> Option<&'r str> {
    header_indices
        .get(target_idx)
        .copied()
        .flatten()
        .and_then(|csv_idx| record.get(csv_idx))
}

/// Derives the capture name from a file name: everything before the first `.`.
pub fn capture_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    file_name
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Parses one Wireshark CSV export.
///
/// `Time`, `Source` and `Destination` are required. A non-numeric or
/// decreasing `Time` aborts the parse with the offending data row (1-based).
pub fn parse_capture_file(input_file_path: &Path) -> Result<Capture, JitterError> {
    let mut content = String::new();
    File::open(input_file_path)?.read_to_string(&mut content)?;
    let rows = parse_capture_str(&content, input_file_path)?;

    info!(
        "Read {} packets from '{}'",
        rows.len(),
        input_file_path.display()
    );

    Ok(Capture {
        name: capture_name(input_file_path),
        path: input_file_path.to_path_buf(),
        rows,
    })
}

/// Parses CSV text. `origin` is only used for error messages.
pub fn parse_capture_str(content: &str, origin: &Path) -> Result<Vec<CaptureRow>, JitterError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    // --- Header Index Mapping ---
    let header_record = reader.headers()?.clone();
    let header_indices: Vec<Option<usize>> = TARGET_HEADERS
        .iter()
        .map(|&target| header_record.iter().position(|h| h.trim() == target))
        .collect();

    for (name, idx) in TARGET_HEADERS.iter().zip(&header_indices) {
        debug!(
            "  '{}': {}",
            name,
            if idx.is_some() { "Found" } else { "Not Found" }
        );
    }

    let missing: Vec<String> = (0..REQUIRED_HEADER_COUNT)
        .filter(|&i| header_indices[i].is_none())
        .map(|i| format!("'{}'", TARGET_HEADERS[i]))
        .collect();
    if !missing.is_empty() {
        return Err(JitterError::MissingHeaders {
            path: origin.to_path_buf(),
            missing: missing.join(", "),
        });
    }

    // --- Data Reading ---
    let mut rows: Vec<CaptureRow> = Vec::new();
    let mut previous_time: Option<f64> = None;

    for (row_index, result) in reader.records().enumerate() {
        let record = result?;
        let row_number = row_index + 1;

        let field = |target_idx: usize| field_at(&record, &header_indices, target_idx);

        let time_text = field(IDX_TIME).unwrap_or("");
        let time_sec: f64 = time_text
            .parse()
            .map_err(|_| JitterError::InvalidTime {
                path: origin.to_path_buf(),
                row: row_number,
                value: time_text.to_string(),
            })?;
        if !time_sec.is_finite() {
            return Err(JitterError::InvalidTime {
                path: origin.to_path_buf(),
                row: row_number,
                value: time_text.to_string(),
            });
        }

        if let Some(prev) = previous_time {
            if time_sec < prev {
                return Err(JitterError::NonMonotonicTime {
                    path: origin.to_path_buf(),
                    row: row_number,
                    previous: prev,
                    current: time_sec,
                });
            }
        }
        previous_time = Some(time_sec);

        rows.push(CaptureRow {
            time_sec,
            source: field(IDX_SOURCE).unwrap_or("").to_string(),
            destination: field(IDX_DESTINATION).unwrap_or("").to_string(),
            protocol: field(IDX_PROTOCOL)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            length: field(IDX_LENGTH).and_then(|l| l.parse::<u32>().ok()),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\"No.\",\"Time\",\"Source\",\"Destination\",\"Protocol\",\"Length\",\"Info\"\n\
\"1\",\"0.000000000\",\"192.168.38.1\",\"192.168.38.11\",\"UDP\",\"298\",\"55000 > 55001 Len=256\"\n\
\"2\",\"0.000213000\",\"192.168.38.11\",\"192.168.38.1\",\"UDP\",\"170\",\"55001 > 55000 Len=128\"\n\
\"3\",\"0.004001000\",\"192.168.38.1\",\"192.168.38.11\",\"UDP\",\"298\",\"55000 > 55001 Len=256\"\n";

    #[test]
    fn test_parse_wireshark_export() {
        let rows = parse_capture_str(SAMPLE, Path::new("sample.csv")).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].source, "192.168.38.11");
        assert_eq!(rows[1].destination, "192.168.38.1");
        assert_eq!(rows[1].protocol.as_deref(), Some("UDP"));
        assert_eq!(rows[1].length, Some(170));
        assert!((rows[2].time_sec - 0.004001).abs() < 1e-12);
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let csv = "Destination,Time,Source\nb,0.5,a\n";
        let rows = parse_capture_str(csv, Path::new("x.csv")).unwrap();
        assert_eq!(rows[0].time_sec, 0.5);
        assert_eq!(rows[0].source, "a");
        assert_eq!(rows[0].protocol, None);
        assert_eq!(rows[0].length, None);
    }

    #[test]
    fn test_missing_required_headers() {
        let csv = "No.,Source,Protocol\n1,a,UDP\n";
        match parse_capture_str(csv, Path::new("x.csv")) {
            Err(JitterError::MissingHeaders { missing, .. }) => {
                assert!(missing.contains("'Time'"));
                assert!(missing.contains("'Destination'"));
                assert!(!missing.contains("'Source'"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_time_reports_row() {
        let csv = "Time,Source,Destination\n0.1,a,b\nabc,a,b\n";
        match parse_capture_str(csv, Path::new("x.csv")) {
            Err(JitterError::InvalidTime { row, value, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_decreasing_time_is_rejected() {
        let csv = "Time,Source,Destination\n0.2,a,b\n0.1,a,b\n";
        assert!(matches!(
            parse_capture_str(csv, Path::new("x.csv")),
            Err(JitterError::NonMonotonicTime { row: 2, .. })
        ));
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let csv = "Time,Source,Destination\n";
        assert!(parse_capture_str(csv, Path::new("x.csv")).unwrap().is_empty());
    }

    #[test]
    fn test_capture_name_stops_at_first_dot() {
        assert_eq!(capture_name(Path::new("/tmp/run_01.udp.csv")), "run_01");
        assert_eq!(capture_name(Path::new("trajectory.csv")), "trajectory");
    }
}

// src/data_input/capture_parser.rs
