pub mod fcfs;
pub mod look;
pub mod partition;
pub mod scan;
pub mod sstf;

use crate::include::common::config::{Direction, PolicyKind};
use crate::include::scheduler::policy::SchedulingPolicy;

pub use fcfs::{fcfs, Fcfs};
pub use look::{clook, clook_directed, look, look_directed, CLook, Look};
pub use partition::partition;
pub use scan::{cscan, cscan_directed, scan, scan_directed, CScan, Scan};
pub use sstf::{sstf, Sstf};

// FCFS and SSTF have no sweep, so they ignore `direction`.
pub fn policy_for(kind: PolicyKind, direction: Direction) -> Box<dyn SchedulingPolicy> {
    match kind {
        PolicyKind::Fcfs => Box::new(Fcfs),
        PolicyKind::Sstf => Box::new(Sstf),
        PolicyKind::Scan => Box::new(Scan { direction }),
        PolicyKind::CScan => Box::new(CScan { direction }),
        PolicyKind::Look => Box::new(Look { direction }),
        PolicyKind::CLook => Box::new(CLook { direction }),
    }
}
