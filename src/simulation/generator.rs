use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::include::common::config::{Track, LOWEST_TRACK};
use crate::include::common::error::SchedulerError;

/// Produces uniformly distributed tracks in `[0, disk_max]`.
///
/// Seeded generators are reproducible, which the tests and the `--seed`
/// flag rely on.
pub struct RequestGenerator {
    rng: StdRng,
    disk_max: Track,
}

impl RequestGenerator {
    pub fn new(disk_max: Track) -> Result<Self, SchedulerError> {
        Self::with_rng(disk_max, StdRng::from_entropy())
    }

    pub fn with_seed(disk_max: Track, seed: u64) -> Result<Self, SchedulerError> {
        Self::with_rng(disk_max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(disk_max: Track, rng: StdRng) -> Result<Self, SchedulerError> {
        if disk_max < LOWEST_TRACK {
            return Err(SchedulerError::InvalidDiskMax(disk_max));
        }
        Ok(RequestGenerator { rng, disk_max })
    }

    pub fn next_track(&mut self) -> Track {
        self.rng.gen_range(LOWEST_TRACK..=self.disk_max)
    }

    pub fn requests(&mut self, count: usize) -> Vec<Track> {
        (0..count).map(|_| self.next_track()).collect()
    }

    pub fn head(&mut self) -> Track {
        self.next_track()
    }
}
