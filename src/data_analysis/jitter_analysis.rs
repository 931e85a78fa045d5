// src/data_analysis/jitter_analysis.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::data_analysis::differencer::{difference, DifferentialSeries, SampleSeries};
use crate::data_analysis::frame_filter::LinkFrames;

/// Jitter of both link directions plus the command delay, all in seconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JitterAnalysis {
    /// Number of frames used from each stream after truncation.
    pub frame_count: usize,
    pub status_jitter: DifferentialSeries,
    pub command_jitter: DifferentialSeries,
    /// `(command_time, command_time - status_time)` for each frame pair.
    pub command_delay: SampleSeries,
}

/// Summary of a series of deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl JitterStats {
    /// Returns `None` for an empty series or one containing NaN.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let arr = Array1::from(values.to_vec());
        let min = *arr.min().ok()?;
        let max = *arr.max().ok()?;
        Some(Self {
            count: arr.len(),
            mean: arr.mean()?,
            std_dev: arr.std(0.0),
            min,
            max,
        })
    }

    pub fn from_series(series: &DifferentialSeries) -> Option<Self> {
        Self::from_values(&series.deltas())
    }
}

/// Computes status/command jitter and command delay for one capture.
///
/// The longer stream is truncated to the length of the shorter one so that
/// delay pairs line up frame by frame.
pub fn analyse_link(frames: &LinkFrames) -> JitterAnalysis {
    let frame_count = frames.status.len().min(frames.command.len());
    let status = &frames.status[..frame_count];
    let command = &frames.command[..frame_count];

    let command_delay = SampleSeries::new(
        command
            .iter()
            .zip(status)
            .map(|(&c, &s)| (c, c - s))
            .collect(),
    );

    JitterAnalysis {
        frame_count,
        status_jitter: difference(&SampleSeries::from_timestamps(status)),
        command_jitter: difference(&SampleSeries::from_timestamps(command)),
        command_delay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_to_shorter_stream() {
        let frames = LinkFrames {
            status: vec![0.0, 0.004, 0.008, 0.012],
            command: vec![0.0002, 0.0043],
        };
        let analysis = analyse_link(&frames);
        assert_eq!(analysis.frame_count, 2);
        assert_eq!(analysis.status_jitter.len(), 1);
        assert_eq!(analysis.command_jitter.len(), 1);
        assert_eq!(analysis.command_delay.len(), 2);
        assert!((analysis.command_delay.points[1].1 - 0.0003).abs() < 1e-12);
        assert_eq!(analysis.command_delay.points[1].0, 0.0043);
    }

    #[test]
    fn test_empty_direction_gives_empty_analysis() {
        let frames = LinkFrames {
            status: vec![0.0, 0.004],
            command: vec![],
        };
        let analysis = analyse_link(&frames);
        assert_eq!(analysis.frame_count, 0);
        assert!(analysis.status_jitter.is_empty());
        assert!(analysis.command_delay.is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = JitterStats::from_values(&[1.0, 3.0]).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 2.0);
        assert!((stats.std_dev - 1.0).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert!(JitterStats::from_values(&[]).is_none());
        assert!(JitterStats::from_values(&[1.0, f64::NAN]).is_none());
    }
}

// src/data_analysis/jitter_analysis.rs
