use crate::include::common::config::{Direction, PolicyKind, Track, LOWEST_TRACK};
use crate::include::common::error::SchedulerError;
use crate::include::scheduler::policy::SchedulingPolicy;
use crate::include::scheduler::visit::VisitSequence;
use crate::scheduler::partition::{sweep, validate};

// SCAN (elevator): sweep to the disk edge, then reverse.
//
// The edge is only visited when requests remain behind the head; with nothing
// to come back for there is no reason to travel to the edge.
pub struct Scan {
    pub direction: Direction,
}

// C-SCAN: sweep to the edge, jump to the opposite edge, keep the same direction.
pub struct CScan {
    pub direction: Direction,
}

impl SchedulingPolicy for Scan {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Scan
    }

    fn schedule(
        &self,
        requests: &[Track],
        head: Track,
        disk_max: Track,
    ) -> Result<VisitSequence, SchedulerError> {
        validate(requests, head, disk_max)?;
        let split = sweep(requests, head, self.direction);
        let mut sequence = VisitSequence::with_capacity(requests.len() + 1);

        match self.direction {
            Direction::Up => {
                sequence.extend_requests(split.ahead);
                if !split.behind.is_empty() {
                    sequence.push_boundary(disk_max);
                    sequence.extend_requests(split.behind.into_iter().rev());
                }
            }
            Direction::Down => {
                sequence.extend_requests(split.ahead.into_iter().rev());
                if !split.behind.is_empty() {
                    sequence.push_boundary(LOWEST_TRACK);
                    sequence.extend_requests(split.behind);
                }
            }
        }

        Ok(sequence)
    }
}

impl SchedulingPolicy for CScan {
    fn kind(&self) -> PolicyKind {
        PolicyKind::CScan
    }

    fn schedule(
        &self,
        requests: &[Track],
        head: Track,
        disk_max: Track,
    ) -> Result<VisitSequence, SchedulerError> {
        validate(requests, head, disk_max)?;
        let split = sweep(requests, head, self.direction);
        let mut sequence = VisitSequence::with_capacity(requests.len() + 2);

        match self.direction {
            Direction::Up => {
                sequence.extend_requests(split.ahead);
                if !split.behind.is_empty() {
                    sequence.push_boundary(disk_max);
                    sequence.push_boundary(LOWEST_TRACK);
                    sequence.extend_requests(split.behind);
                }
            }
            Direction::Down => {
                sequence.extend_requests(split.ahead.into_iter().rev());
                if !split.behind.is_empty() {
                    sequence.push_boundary(LOWEST_TRACK);
                    sequence.push_boundary(disk_max);
                    sequence.extend_requests(split.behind.into_iter().rev());
                }
            }
        }

        Ok(sequence)
    }
}

/// Sweeps up. The edge at `disk_max` is visited only when requests remain below `head`.
pub fn scan(requests: &[Track], head: Track, disk_max: Track) -> Result<VisitSequence, SchedulerError> {
    scan_directed(requests, head, disk_max, Direction::Up)
}

pub fn scan_directed(
    requests: &[Track],
    head: Track,
    disk_max: Track,
    direction: Direction,
) -> Result<VisitSequence, SchedulerError> {
    Scan { direction }.schedule(requests, head, disk_max)
}

/// Sweeps up. Both edges are visited (`disk_max`, then 0) only when requests remain below `head`.
pub fn cscan(requests: &[Track], head: Track, disk_max: Track) -> Result<VisitSequence, SchedulerError> {
    cscan_directed(requests, head, disk_max, Direction::Up)
}

pub fn cscan_directed(
    requests: &[Track],
    head: Track,
    disk_max: Track,
    direction: Direction,
) -> Result<VisitSequence, SchedulerError> {
    CScan { direction }.schedule(requests, head, disk_max)
}
