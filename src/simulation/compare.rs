use std::thread;
use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::include::common::config::{Direction, PolicyKind, Track};
use crate::include::common::error::{SchedulerError, SimulationError};
use crate::include::seek::seek_report::SeekReport;
use crate::scheduler::policy_for;
use crate::seek::evaluate_seek;
use crate::simulation::config::SimulationConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyReport {
    pub policy: PolicyKind,
    pub report: SeekReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub head: Track,
    pub disk_max: Track,
    pub direction: Direction,
    pub reports: Vec<PolicyReport>,
}

impl Comparison {
    // Lowest total seek wins; ties go to the policy listed first in PolicyKind::ALL.
    pub fn best(&self) -> Option<&PolicyReport> {
        self.reports
            .iter()
            .min_by_key(|entry| (entry.report.total_seek, entry.policy as u8))
    }

    pub fn get(&self, policy: PolicyKind) -> Option<&PolicyReport> {
        self.reports.iter().find(|entry| entry.policy == policy)
    }
}

pub fn run_policy(
    policy: PolicyKind,
    requests: &[Track],
    head: Track,
    config: &SimulationConfig,
) -> Result<PolicyReport, SchedulerError> {
    let started = Instant::now();
    let scheduler = policy_for(policy, config.direction);
    let sequence = scheduler.schedule(requests, head, config.disk_max)?;
    let report = evaluate_seek(&sequence, head, config.disk_max)?;
    let policy = scheduler.kind();
    debug!(
        "{} serviced {} requests, total seek {} in {:?}",
        policy,
        report.serviced(),
        report.total_seek,
        started.elapsed()
    );
    Ok(PolicyReport { policy, report })
}

/// Runs every configured policy against the same request batch and head.
pub fn compare_policies(
    requests: &[Track],
    head: Track,
    config: &SimulationConfig,
) -> Result<Comparison, SimulationError> {
    config.validate()?;
    let reports = config
        .policies
        .iter()
        .map(|&policy| run_policy(policy, requests, head, config))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Comparison {
        head,
        disk_max: config.disk_max,
        direction: config.direction,
        reports,
    })
}

/// Same result as [`compare_policies`], one scoped thread per policy.
pub fn compare_policies_parallel(
    requests: &[Track],
    head: Track,
    config: &SimulationConfig,
) -> Result<Comparison, SimulationError> {
    config.validate()?;
    let results: Vec<Result<PolicyReport, SchedulerError>> = thread::scope(|scope| {
        let handles: Vec<_> = config
            .policies
            .iter()
            .map(|&policy| scope.spawn(move || run_policy(policy, requests, head, config)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload)))
            .collect()
    });
    let reports = results.into_iter().collect::<Result<Vec<_>, _>>()?;

    Ok(Comparison {
        head,
        disk_max: config.disk_max,
        direction: config.direction,
        reports,
    })
}
