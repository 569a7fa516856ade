use disk_scheduling::include::common::config::{Direction, PolicyKind, Track, DEFAULT_DISK_MAX};
use disk_scheduling::include::common::error::SchedulerError;
use disk_scheduling::include::scheduler::visit::VisitSequence;
use disk_scheduling::scheduler::{
    clook, clook_directed, cscan, cscan_directed, fcfs, look, look_directed, policy_for, scan,
    scan_directed, sstf,
};
use disk_scheduling::seek::evaluate_seek;
use disk_scheduling::simulation::generator::RequestGenerator;

const REQUESTS: [Track; 8] = [98, 183, 37, 122, 14, 124, 65, 67];
const HEAD: Track = 53;

fn total_seek(sequence: &VisitSequence, head: Track) -> u64 {
    evaluate_seek(sequence, head, DEFAULT_DISK_MAX).unwrap().total_seek
}

fn sorted(mut tracks: Vec<Track>) -> Vec<Track> {
    tracks.sort();
    tracks
}

#[test]
fn test_fcfs_keeps_arrival_order() {
    let sequence = fcfs(&REQUESTS, HEAD, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(sequence.tracks(), REQUESTS.to_vec(), "FCFS is the identity");
    assert_eq!(total_seek(&sequence, HEAD), 640);
}

#[test]
fn test_sstf_sequence() {
    let sequence = sstf(&REQUESTS, HEAD, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(sequence.tracks()[0], 65, "65 is 12 tracks away, the closest to 53");
    assert_eq!(sequence.tracks(), vec![65, 67, 37, 14, 98, 122, 124, 183]);
    assert_eq!(total_seek(&sequence, HEAD), 236);
}

#[test]
fn test_scan_touches_max_then_reverses() {
    let sequence = scan(&REQUESTS, HEAD, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(sequence.tracks(), vec![65, 67, 98, 122, 124, 183, 199, 37, 14]);
    assert_eq!(sequence.boundary_count(), 1);
    let tracks = sequence.tracks();
    let edge = tracks.iter().position(|&t| t == 199).unwrap();
    assert!(tracks[edge + 1] < 199, "head reverses right after the edge");
    assert_eq!(total_seek(&sequence, HEAD), 331);
}

#[test]
fn test_cscan_wraps_through_both_edges() {
    let sequence = cscan(&REQUESTS, HEAD, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(sequence.tracks(), vec![65, 67, 98, 122, 124, 183, 199, 0, 14, 37]);
    assert_eq!(sequence.boundary_count(), 2);
    assert_eq!(total_seek(&sequence, HEAD), 382);
}

#[test]
fn test_look_and_clook_never_touch_edges() {
    let look_seq = look(&REQUESTS, HEAD, DEFAULT_DISK_MAX).unwrap();
    let clook_seq = clook(&REQUESTS, HEAD, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(look_seq.tracks(), vec![65, 67, 98, 122, 124, 183, 37, 14]);
    assert_eq!(clook_seq.tracks(), vec![65, 67, 98, 122, 124, 183, 14, 37]);
    for sequence in [&look_seq, &clook_seq] {
        assert!(!sequence.tracks().contains(&0));
        assert!(!sequence.tracks().contains(&199));
        assert_eq!(sequence.boundary_count(), 0);
    }
    assert_eq!(total_seek(&look_seq, HEAD), 299);
    assert_eq!(total_seek(&clook_seq, HEAD), 322);
}

#[test]
fn test_scan_with_nothing_above_head_still_reaches_edge() {
    let sequence = scan(&[10, 40], 150, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(sequence.tracks(), vec![199, 40, 10]);
    assert_eq!(sequence.serviced(), vec![40, 10]);
}

#[test]
fn test_no_edge_visit_when_nothing_behind() {
    let scan_seq = scan(&[60, 90], 50, DEFAULT_DISK_MAX).unwrap();
    let cscan_seq = cscan(&[60, 90], 50, DEFAULT_DISK_MAX).unwrap();
    assert_eq!(scan_seq.tracks(), vec![60, 90]);
    assert_eq!(cscan_seq.tracks(), vec![60, 90]);
}

#[test]
fn test_down_direction_sequences() {
    let scan_seq = scan_directed(&REQUESTS, HEAD, DEFAULT_DISK_MAX, Direction::Down).unwrap();
    assert_eq!(scan_seq.tracks(), vec![37, 14, 0, 65, 67, 98, 122, 124, 183]);
    assert_eq!(total_seek(&scan_seq, HEAD), 236);

    let cscan_seq = cscan_directed(&REQUESTS, HEAD, DEFAULT_DISK_MAX, Direction::Down).unwrap();
    assert_eq!(cscan_seq.tracks(), vec![37, 14, 0, 199, 183, 124, 122, 98, 67, 65]);
    assert_eq!(total_seek(&cscan_seq, HEAD), 386);

    let look_seq = look_directed(&REQUESTS, HEAD, DEFAULT_DISK_MAX, Direction::Down).unwrap();
    assert_eq!(look_seq.tracks(), vec![37, 14, 65, 67, 98, 122, 124, 183]);
    assert_eq!(total_seek(&look_seq, HEAD), 208);

    let clook_seq = clook_directed(&REQUESTS, HEAD, DEFAULT_DISK_MAX, Direction::Down).unwrap();
    assert_eq!(clook_seq.tracks(), vec![37, 14, 183, 124, 122, 98, 67, 65]);
    assert_eq!(total_seek(&clook_seq, HEAD), 326);
}

#[test]
fn test_down_direction_services_head_track_first() {
    let sequence = look_directed(&[80, 50, 20], 50, DEFAULT_DISK_MAX, Direction::Down).unwrap();
    assert_eq!(sequence.tracks(), vec![50, 20, 80]);
}

#[test]
fn test_empty_request_set_for_every_policy() {
    for kind in PolicyKind::ALL {
        let sequence = policy_for(kind, Direction::Up).schedule(&[], HEAD, DEFAULT_DISK_MAX).unwrap();
        assert!(sequence.is_empty(), "{} should produce nothing", kind);
        let report = evaluate_seek(&sequence, HEAD, DEFAULT_DISK_MAX).unwrap();
        assert_eq!(report.total_seek, 0);
        assert_eq!(report.average_seek, 0.0);
        assert_eq!(report.average_per_request(), 0.0);
    }
}

#[test]
fn test_single_request_at_head_costs_nothing() {
    for kind in PolicyKind::ALL {
        for direction in [Direction::Up, Direction::Down] {
            let sequence = policy_for(kind, direction).schedule(&[HEAD], HEAD, DEFAULT_DISK_MAX).unwrap();
            assert_eq!(sequence.serviced(), vec![HEAD]);
            assert_eq!(total_seek(&sequence, HEAD), 0, "{} {:?}", kind, direction);
        }
    }
}

#[test]
fn test_duplicates_are_preserved() {
    let requests = [70, 30, 70, 30, 50];
    for kind in PolicyKind::ALL {
        let sequence = policy_for(kind, Direction::Up).schedule(&requests, 50, DEFAULT_DISK_MAX).unwrap();
        assert_eq!(sorted(sequence.serviced()), vec![30, 30, 50, 70, 70], "{}", kind);
    }
}

#[test]
fn test_invalid_input_is_rejected() {
    for kind in PolicyKind::ALL {
        let policy = policy_for(kind, Direction::Up);
        assert_eq!(
            policy.schedule(&[10], 5, -1),
            Err(SchedulerError::InvalidDiskMax(-1))
        );
        assert_eq!(
            policy.schedule(&[10, 200], 5, DEFAULT_DISK_MAX),
            Err(SchedulerError::InvalidTrack { track: 200, disk_max: DEFAULT_DISK_MAX })
        );
        assert_eq!(
            policy.schedule(&[10], -3, DEFAULT_DISK_MAX),
            Err(SchedulerError::InvalidTrack { track: -3, disk_max: DEFAULT_DISK_MAX })
        );
    }
}

#[test]
fn test_custom_disk_max() {
    let sequence = scan(&[10, 2, 7], 5, 15).unwrap();
    assert_eq!(sequence.tracks(), vec![7, 10, 15, 2]);
    let sequence = cscan(&[10, 2, 7], 5, 15).unwrap();
    assert_eq!(sequence.tracks(), vec![7, 10, 15, 0, 2]);
    assert!(scan(&[16], 5, 15).is_err());
}

#[test]
fn test_sstf_beats_fcfs_on_known_batches() {
    let batches: [(&[Track], Track); 3] = [
        (&REQUESTS, HEAD),
        (&[176, 79, 34, 60, 92, 11, 41, 114], 50),
        (&[10, 190, 20, 180, 30, 170], 100),
    ];
    for (requests, head) in batches {
        let fcfs_seek = total_seek(&fcfs(requests, head, DEFAULT_DISK_MAX).unwrap(), head);
        let sstf_seek = total_seek(&sstf(requests, head, DEFAULT_DISK_MAX).unwrap(), head);
        assert!(sstf_seek <= fcfs_seek, "SSTF {} vs FCFS {}", sstf_seek, fcfs_seek);
    }
}

// Properties over seeded random batches.

fn random_batches() -> Vec<(Vec<Track>, Track)> {
    let mut generator = RequestGenerator::with_seed(DEFAULT_DISK_MAX, 7).unwrap();
    (0..60)
        .map(|i| {
            let requests = generator.requests(i % 25);
            let head = generator.head();
            (requests, head)
        })
        .collect()
}

fn is_non_decreasing(tracks: &[Track]) -> bool {
    tracks.windows(2).all(|w| w[0] <= w[1])
}

fn is_non_increasing(tracks: &[Track]) -> bool {
    tracks.windows(2).all(|w| w[0] >= w[1])
}

#[test]
fn test_no_request_dropped_or_duplicated() {
    for (requests, head) in random_batches() {
        for kind in PolicyKind::ALL {
            for direction in [Direction::Up, Direction::Down] {
                let sequence = policy_for(kind, direction)
                    .schedule(&requests, head, DEFAULT_DISK_MAX)
                    .unwrap();
                assert_eq!(sorted(sequence.serviced()), sorted(requests.clone()));
                for visit in sequence.visits() {
                    assert!((0..=DEFAULT_DISK_MAX).contains(&visit.track));
                }
                if matches!(kind, PolicyKind::Fcfs | PolicyKind::Sstf | PolicyKind::Look | PolicyKind::CLook) {
                    assert_eq!(sequence.boundary_count(), 0, "{} adds no edge visits", kind);
                }
            }
        }
    }
}

#[test]
fn test_fcfs_identity_on_random_batches() {
    for (requests, head) in random_batches() {
        assert_eq!(fcfs(&requests, head, DEFAULT_DISK_MAX).unwrap().tracks(), requests);
    }
}

#[test]
fn test_sweep_segments_are_monotonic() {
    for (requests, head) in random_batches() {
        let ahead = requests.iter().filter(|&&t| t >= head).count();

        let cscan_tracks = cscan(&requests, head, DEFAULT_DISK_MAX).unwrap().serviced();
        let clook_tracks = clook(&requests, head, DEFAULT_DISK_MAX).unwrap().serviced();
        for tracks in [&cscan_tracks, &clook_tracks] {
            assert!(is_non_decreasing(&tracks[..ahead]));
            assert!(is_non_decreasing(&tracks[ahead..]));
        }

        let scan_tracks = scan(&requests, head, DEFAULT_DISK_MAX).unwrap().serviced();
        let look_tracks = look(&requests, head, DEFAULT_DISK_MAX).unwrap().serviced();
        for tracks in [&scan_tracks, &look_tracks] {
            assert!(is_non_decreasing(&tracks[..ahead]));
            assert!(is_non_increasing(&tracks[ahead..]));
            assert!(tracks[ahead..].iter().all(|&t| t < head));
        }
    }
}

#[test]
fn test_policies_are_deterministic() {
    for (requests, head) in random_batches().into_iter().take(10) {
        for kind in PolicyKind::ALL {
            let policy = policy_for(kind, Direction::Up);
            assert_eq!(
                policy.schedule(&requests, head, DEFAULT_DISK_MAX),
                policy.schedule(&requests, head, DEFAULT_DISK_MAX)
            );
        }
    }
}

#[test]
fn test_policy_for_reports_its_kind() {
    for kind in PolicyKind::ALL {
        for direction in [Direction::Up, Direction::Down] {
            assert_eq!(policy_for(kind, direction).kind(), kind);
        }
    }
}
