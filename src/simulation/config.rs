use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::include::common::config::{Direction, PolicyKind, Track, DEFAULT_DISK_MAX};
use crate::include::common::error::{SchedulerError, SimulationError};

// Settings shared by every policy in one simulation run. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub disk_max: Track,
    pub direction: Direction,
    pub policies: Vec<PolicyKind>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            disk_max: DEFAULT_DISK_MAX,
            direction: Direction::Up,
            policies: PolicyKind::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.disk_max < 0 {
            return Err(SchedulerError::InvalidDiskMax(self.disk_max).into());
        }
        if self.policies.is_empty() {
            return Err(SimulationError::Parse("no scheduling policy selected".to_string()));
        }
        Ok(())
    }

    pub fn load_from_disk(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let mut file = File::open(path)?;
        let mut json = String::new();
        file.read_to_string(&mut json)?;
        let config: SimulationConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_disk(&self, path: impl AsRef<Path>) -> Result<(), SimulationError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
