use crate::include::common::config::{Direction, Track, LOWEST_TRACK};
use crate::include::common::error::SchedulerError;

// Requests split around the head for a sweep. Both halves are sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweep {
    // serviced on the first pass, in the direction of travel
    pub ahead: Vec<Track>,
    // left behind the head, picked up after the reversal or wrap
    pub behind: Vec<Track>,
}

/// Splits `requests` into `(below, at_or_above)` relative to `head`.
///
/// A request equal to `head` always lands in `at_or_above`. The two halves
/// are sorted ascending and together hold exactly the input multiset.
pub fn partition(requests: &[Track], head: Track) -> (Vec<Track>, Vec<Track>) {
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();
    // first index whose track is >= head
    let split = sorted.partition_point(|&track| track < head);
    let at_or_above = sorted.split_off(split);
    (sorted, at_or_above)
}

/// Like [`partition`] but oriented by the sweep direction. Moving down, a
/// request equal to `head` is serviced first, so it goes to `ahead`.
pub fn sweep(requests: &[Track], head: Track, direction: Direction) -> Sweep {
    match direction {
        Direction::Up => {
            let (below, at_or_above) = partition(requests, head);
            Sweep { ahead: at_or_above, behind: below }
        }
        Direction::Down => {
            let mut sorted = requests.to_vec();
            sorted.sort_unstable();
            let split = sorted.partition_point(|&track| track <= head);
            let above = sorted.split_off(split);
            Sweep { ahead: sorted, behind: above }
        }
    }
}

pub fn validate_track(track: Track, disk_max: Track) -> Result<(), SchedulerError> {
    if track < LOWEST_TRACK || track > disk_max {
        return Err(SchedulerError::InvalidTrack { track, disk_max });
    }
    Ok(())
}

// Rejects a negative disk max, then any head or request outside [0, disk_max].
pub fn validate(requests: &[Track], head: Track, disk_max: Track) -> Result<(), SchedulerError> {
    if disk_max < LOWEST_TRACK {
        return Err(SchedulerError::InvalidDiskMax(disk_max));
    }
    validate_track(head, disk_max)?;
    for &track in requests {
        validate_track(track, disk_max)?;
    }
    Ok(())
}
