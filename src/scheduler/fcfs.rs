use crate::include::common::config::{PolicyKind, Track};
use crate::include::common::error::SchedulerError;
use crate::include::scheduler::policy::SchedulingPolicy;
use crate::include::scheduler::visit::VisitSequence;
use crate::scheduler::partition::validate;

// First come first serve: requests in arrival order.
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fcfs
    }

    fn schedule(
        &self,
        requests: &[Track],
        head: Track,
        disk_max: Track,
    ) -> Result<VisitSequence, SchedulerError> {
        validate(requests, head, disk_max)?;
        Ok(VisitSequence::from_requests(requests.iter().copied()))
    }
}

pub fn fcfs(requests: &[Track], head: Track, disk_max: Track) -> Result<VisitSequence, SchedulerError> {
    Fcfs.schedule(requests, head, disk_max)
}
