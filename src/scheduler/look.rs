use crate::include::common::config::{Direction, PolicyKind, Track};
use crate::include::common::error::SchedulerError;
use crate::include::scheduler::policy::SchedulingPolicy;
use crate::include::scheduler::visit::VisitSequence;
use crate::scheduler::partition::{sweep, validate};

// LOOK: like SCAN but reverses at the last pending request instead of the edge.
pub struct Look {
    pub direction: Direction,
}

// C-LOOK: jumps from the last request in the sweep straight to the first one behind.
pub struct CLook {
    pub direction: Direction,
}

impl SchedulingPolicy for Look {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Look
    }

    fn schedule(
        &self,
        requests: &[Track],
        head: Track,
        disk_max: Track,
    ) -> Result<VisitSequence, SchedulerError> {
        validate(requests, head, disk_max)?;
        let split = sweep(requests, head, self.direction);
        let mut sequence = VisitSequence::with_capacity(requests.len());

        match self.direction {
            Direction::Up => {
                sequence.extend_requests(split.ahead);
                sequence.extend_requests(split.behind.into_iter().rev());
            }
            Direction::Down => {
                sequence.extend_requests(split.ahead.into_iter().rev());
                sequence.extend_requests(split.behind);
            }
        }

        Ok(sequence)
    }
}

impl SchedulingPolicy for CLook {
    fn kind(&self) -> PolicyKind {
        PolicyKind::CLook
    }

    fn schedule(
        &self,
        requests: &[Track],
        head: Track,
        disk_max: Track,
    ) -> Result<VisitSequence, SchedulerError> {
        validate(requests, head, disk_max)?;
        let split = sweep(requests, head, self.direction);
        let mut sequence = VisitSequence::with_capacity(requests.len());

        match self.direction {
            Direction::Up => {
                sequence.extend_requests(split.ahead);
                sequence.extend_requests(split.behind);
            }
            Direction::Down => {
                sequence.extend_requests(split.ahead.into_iter().rev());
                sequence.extend_requests(split.behind.into_iter().rev());
            }
        }

        Ok(sequence)
    }
}

pub fn look(requests: &[Track], head: Track, disk_max: Track) -> Result<VisitSequence, SchedulerError> {
    look_directed(requests, head, disk_max, Direction::Up)
}

pub fn look_directed(
    requests: &[Track],
    head: Track,
    disk_max: Track,
    direction: Direction,
) -> Result<VisitSequence, SchedulerError> {
    Look { direction }.schedule(requests, head, disk_max)
}

pub fn clook(requests: &[Track], head: Track, disk_max: Track) -> Result<VisitSequence, SchedulerError> {
    clook_directed(requests, head, disk_max, Direction::Up)
}

pub fn clook_directed(
    requests: &[Track],
    head: Track,
    disk_max: Track,
    direction: Direction,
) -> Result<VisitSequence, SchedulerError> {
    CLook { direction }.schedule(requests, head, disk_max)
}
