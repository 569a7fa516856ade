use crate::include::common::config::{PolicyKind, Track};
use crate::include::common::error::SchedulerError;
use crate::include::scheduler::visit::VisitSequence;

pub trait SchedulingPolicy: Send + Sync {
    fn kind(&self) -> PolicyKind;
    // Order the pending requests starting from `head`. Pure: the same inputs always give the same sequence.
    fn schedule(
        &self,
        requests: &[Track],
        head: Track,
        disk_max: Track,
    ) -> Result<VisitSequence, SchedulerError>;
}
