use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::include::common::error::SimulationError;

pub type Track = i32;
pub const DISK_SIZE: Track = 200; // tracks 0..=199
pub const DEFAULT_DISK_MAX: Track = DISK_SIZE - 1;
pub const LOWEST_TRACK: Track = 0;

// Initial sweep direction of the head. Up moves toward the disk max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl FromStr for Direction {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "right" => Ok(Direction::Up),
            "down" | "left" => Ok(Direction::Down),
            other => Err(SimulationError::Parse(format!("unknown direction '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Fcfs,
    Sstf,
    Scan,
    CScan,
    Look,
    CLook,
}

impl PolicyKind {
    // canonical order, also used to break ties between equally good policies
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fcfs,
        PolicyKind::Sstf,
        PolicyKind::Scan,
        PolicyKind::CScan,
        PolicyKind::Look,
        PolicyKind::CLook,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "fcfs",
            PolicyKind::Sstf => "sstf",
            PolicyKind::Scan => "scan",
            PolicyKind::CScan => "cscan",
            PolicyKind::Look => "look",
            PolicyKind::CLook => "clook",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sstf => "SSTF",
            PolicyKind::Scan => "SCAN",
            PolicyKind::CScan => "C-SCAN",
            PolicyKind::Look => "LOOK",
            PolicyKind::CLook => "C-LOOK",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "");
        PolicyKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| SimulationError::UnknownPolicy(s.to_string()))
    }
}
