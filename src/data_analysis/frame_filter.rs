// src/data_analysis/frame_filter.rs

use crate::constants::{DEFAULT_ARM_ADDRESS, DEFAULT_HOST_ADDRESS};
use crate::data_input::capture_data::CaptureRow;

/// The two ends of the UDP control link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEndpoints {
    pub arm: String,
    pub host: String,
}

impl Default for LinkEndpoints {
    fn default() -> Self {
        Self {
            arm: DEFAULT_ARM_ADDRESS.to_string(),
            host: DEFAULT_HOST_ADDRESS.to_string(),
        }
    }
}

/// Timestamps (seconds) of each direction of the link, in capture order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkFrames {
    /// Arm -> host.
    pub status: Vec<f64>,
    /// Host -> arm.
    pub command: Vec<f64>,
}

/// Splits capture rows into status and command frames. Other traffic is dropped.
pub fn split_link_frames(rows: &[CaptureRow], endpoints: &LinkEndpoints) -> LinkFrames {
    let mut frames = LinkFrames::default();
    for row in rows {
        if row.source == endpoints.arm && row.destination == endpoints.host {
            frames.status.push(row.time_sec);
        } else if row.source == endpoints.host && row.destination == endpoints.arm {
            frames.command.push(row.time_sec);
        }
    }
    frames
}


// src/data_analysis/frame_filter.rs
