use crate::include::common::config::{PolicyKind, Track};
use crate::include::common::error::SchedulerError;
use crate::include::scheduler::policy::SchedulingPolicy;
use crate::include::scheduler::visit::VisitSequence;
use crate::scheduler::partition::validate;

// Shortest seek time first. Equidistant candidates resolve to the lower track.
pub struct Sstf;

impl SchedulingPolicy for Sstf {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Sstf
    }

    fn schedule(
        &self,
        requests: &[Track],
        head: Track,
        disk_max: Track,
    ) -> Result<VisitSequence, SchedulerError> {
        validate(requests, head, disk_max)?;

        // private copy, the caller's request set is never touched
        let mut remaining = requests.to_vec();
        let mut sequence = VisitSequence::with_capacity(remaining.len());
        let mut current = head;

        // given the current head position, take the closest pending track.
        // keying on (distance, track) makes the choice independent of storage order
        while let Some(index) = remaining
            .iter()
            .enumerate()
            .min_by_key(|(_, &track)| ((track - current).abs(), track))
            .map(|(index, _)| index)
        {
            let track = remaining.swap_remove(index);
            sequence.push_request(track);
            current = track;
        }

        Ok(sequence)
    }
}

pub fn sstf(requests: &[Track], head: Track, disk_max: Track) -> Result<VisitSequence, SchedulerError> {
    Sstf.schedule(requests, head, disk_max)
}
