use crate::models::bug::{BugReport, Severity, Status};
use crate::models::stats::BugStats;

pub fn compute_stats(bugs: &[BugReport]) -> BugStats {
    let mut stats = BugStats {
        total: bugs.len(),
        ..BugStats::default()
    };

    for bug in bugs {
        match bug.status {
            Status::Open => stats.open += 1,
            Status::InProgress => stats.in_progress += 1,
            Status::Resolved => stats.resolved += 1,
            Status::Closed => stats.closed += 1,
        }
        if bug.severity == Severity::Critical {
            stats.critical += 1;
        }
    }

    stats
}
