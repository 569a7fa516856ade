//! Disk head scheduling: FCFS, SSTF, SCAN, C-SCAN, LOOK and C-LOOK orderings
//! over a static batch of track requests, plus the seek distance they cost.

pub mod common;
pub mod include;
pub mod scheduler;
pub mod seek;
pub mod simulation;
