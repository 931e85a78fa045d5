// src/data_analysis/differencer.rs

/// Ordered `(time, value)` samples taken from one capture.
///
/// Time is expected to be non-decreasing; the series does not enforce it, the
/// capture parser does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    pub points: Vec<(f64, f64)>,
}

impl SampleSeries {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Series whose value is the timestamp itself, used for packet-time jitter.
    pub fn from_timestamps(timestamps: &[f64]) -> Self {
        Self {
            points: timestamps.iter().map(|&t| (t, t)).collect(),
        }
    }

    /// Pairs each value with its index, for data with no timestamps.
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            points: values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, v)| v).collect()
    }
}

/// First difference of a [`SampleSeries`]: one `(time, delta)` pair per
/// consecutive sample pair, timed at the later sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DifferentialSeries {
    pub points: Vec<(f64, f64)>,
}

impl DifferentialSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn deltas(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, d)| d).collect()
    }

    /// Copy with every delta multiplied by `factor` (e.g. seconds to ms).
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            points: self.points.iter().map(|&(t, d)| (t, d * factor)).collect(),
        }
    }
}

/// Computes `delta[i] = value[i] - value[i-1]` over the series.
///
/// Inputs of length 0 or 1 yield an empty series.
pub fn difference(series: &SampleSeries) -> DifferentialSeries {
    DifferentialSeries {
        points: series
            .points
            .windows(2)
            .map(|pair| (pair[1].0, pair[1].1 - pair[0].1))
            .collect(),
    }
}

/// Value-only form of [`difference`].
pub fn difference_values(data: &[f64]) -> Vec<f64> {
    data.windows(2).map(|pair| pair[1] - pair[0]).collect()
}


// src/data_analysis/differencer.rs
