use crate::include::common::config::Track;
use crate::include::common::error::SchedulerError;
use crate::include::scheduler::visit::VisitSequence;
use crate::include::seek::seek_report::SeekReport;
use crate::scheduler::partition::validate_track;

/// Walks `sequence` from `head`, summing the absolute distance of every move.
///
/// Tracks outside `[0, disk_max]` are rejected rather than measured. The
/// average is taken over every visit in the sequence, boundary sweeps
/// included; an empty sequence reports `0.0`.
pub fn evaluate_seek(
    sequence: &VisitSequence,
    head: Track,
    disk_max: Track,
) -> Result<SeekReport, SchedulerError> {
    if disk_max < 0 {
        return Err(SchedulerError::InvalidDiskMax(disk_max));
    }
    validate_track(head, disk_max)?;

    let mut total_seek: u64 = 0;
    let mut current = head;
    for visit in sequence.visits() {
        validate_track(visit.track, disk_max)?;
        total_seek += u64::from(current.abs_diff(visit.track));
        current = visit.track;
    }

    let average_seek = if sequence.is_empty() {
        0.0
    } else {
        total_seek as f64 / sequence.len() as f64
    };

    Ok(SeekReport {
        sequence: sequence.clone(),
        total_seek,
        average_seek,
    })
}
