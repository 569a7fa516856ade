use serde::{Deserialize, Serialize};

use crate::include::scheduler::visit::VisitSequence;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekReport {
    pub sequence: VisitSequence,
    pub total_seek: u64,
    // total seek over every visit, boundary sweeps included. 0.0 for an empty sequence
    pub average_seek: f64,
}

impl SeekReport {
    pub fn serviced(&self) -> usize {
        self.sequence.len() - self.sequence.boundary_count()
    }

    /// Total seek divided by the number of serviced requests only, which keeps
    /// SCAN and C-SCAN comparable with the other policies.
    pub fn average_per_request(&self) -> f64 {
        match self.serviced() {
            0 => 0.0,
            n => self.total_seek as f64 / n as f64,
        }
    }
}
