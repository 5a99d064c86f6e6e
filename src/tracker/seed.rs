use crate::models::bug::{BugReport, Severity, Status, TagSet};
use chrono::{DateTime, TimeZone, Utc};

/// Mock bugs loaded on startup, most recent first.
pub fn mock_bugs() -> Vec<BugReport> {
    vec![
        BugReport {
            id: "1".to_string(),
            title: "Login form validation not working".to_string(),
            description: "Email validation allows invalid formats".to_string(),
            severity: Severity::High,
            status: Status::Open,
            reporter: "John Doe".to_string(),
            assignee: Some("Jane Smith".to_string()),
            tags: ["frontend", "validation"].into_iter().collect(),
            created_at: day(2024, 1, 15),
            updated_at: day(2024, 1, 15),
        },
        BugReport {
            id: "2".to_string(),
            title: "Database connection timeout".to_string(),
            description: "Server throws timeout error during peak hours".to_string(),
            severity: Severity::Critical,
            status: Status::InProgress,
            reporter: "Alice Johnson".to_string(),
            assignee: Some("Bob Wilson".to_string()),
            tags: ["backend", "database"].into_iter().collect(),
            created_at: day(2024, 1, 14),
            updated_at: day(2024, 1, 16),
        },
        BugReport {
            id: "3".to_string(),
            title: "UI button misalignment on mobile".to_string(),
            description: "Submit button appears cut off on small screens".to_string(),
            severity: Severity::Low,
            status: Status::Resolved,
            reporter: "Charlie Brown".to_string(),
            assignee: None,
            tags: ["frontend", "mobile", "ui"].into_iter().collect::<TagSet>(),
            created_at: day(2024, 1, 13),
            updated_at: day(2024, 1, 17),
        },
    ]
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_timestamps_ordered() {
        let bugs = mock_bugs();
        let mut ids: Vec<&str> = bugs.iter().map(|b| b.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert!(bugs.iter().all(|b| b.updated_at >= b.created_at));
        assert_eq!(bugs[0].created_at.to_rfc3339(), "2024-01-15T00:00:00+00:00");
    }
}
