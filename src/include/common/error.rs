use std::io;

use thiserror::Error;

use crate::include::common::config::Track;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Disk max must not be negative, got {0}")]
    InvalidDiskMax(Track),
    #[error("Track {track} is outside the disk range [0, {disk_max}]")]
    InvalidTrack { track: Track, disk_max: Track },
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}
