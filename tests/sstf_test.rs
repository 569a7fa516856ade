use disk_scheduling::include::common::config::DEFAULT_DISK_MAX;
use disk_scheduling::scheduler::sstf;

#[test]
fn test_tie_prefers_lower_track() {
    let sequence = sstf(&[60, 40], 50, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(sequence.tracks(), vec![40, 60], "40 and 60 are both 10 away");

    // same tie, opposite storage order
    let sequence = sstf(&[40, 60], 50, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(sequence.tracks(), vec![40, 60]);
}

#[test]
fn test_tie_later_in_the_walk() {
    // 30 and 170 are both 70 tracks from the head
    let sequence = sstf(&[10, 190, 20, 180, 30, 170], 100, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(sequence.tracks(), vec![30, 20, 10, 170, 180, 190]);
}

#[test]
fn test_caller_requests_untouched() {
    let requests = vec![98, 183, 37, 122];
    let _ = sstf(&requests, 53, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(requests, vec![98, 183, 37, 122]);
}

#[test]
fn test_request_at_head_goes_first() {
    let sequence = sstf(&[90, 53, 10], 53, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(sequence.tracks()[0], 53);
}
