use crate::error::{TrackerError, TrackerResult};
use crate::models::bug::{BugPatch, BugReport, Status};
use crate::models::draft::ValidDraft;
use crate::tracker::validation::normalize_assignee;
use chrono::{DateTime, Duration, Utc};
use log::{debug, info};

/// Owned, in-memory bug collection, most recent first.
///
/// Records are only handed out by shared reference, so every change goes
/// through `create`, `update` or `delete` and `updated_at` stays honest.
#[derive(Debug, Default)]
pub struct BugStore {
    bugs: Vec<BugReport>,
}

impl BugStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bugs(bugs: Vec<BugReport>) -> Self {
        Self { bugs }
    }

    pub fn seeded() -> Self {
        Self::with_bugs(crate::tracker::seed::mock_bugs())
    }

    pub fn bugs(&self) -> &[BugReport] {
        &self.bugs
    }

    pub fn len(&self) -> usize {
        self.bugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bugs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&BugReport> {
        self.bugs.iter().find(|bug| bug.id == id)
    }

    pub fn create(&mut self, draft: ValidDraft) -> &BugReport {
        let now = Utc::now();
        let bug = BugReport {
            id: self.fresh_id(),
            title: draft.title,
            description: draft.description,
            severity: draft.severity,
            status: draft.status,
            reporter: draft.reporter,
            assignee: draft.assignee,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        };

        info!("Created bug {} ({}, {})", bug.id, bug.severity, bug.status);
        self.bugs.insert(0, bug);
        &self.bugs[0]
    }

    pub fn update(&mut self, id: &str, patch: BugPatch) -> TrackerResult<&BugReport> {
        let bug = self
            .bugs
            .iter_mut()
            .find(|bug| bug.id == id)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))?;

        if let Some(title) = patch.title {
            bug.title = title;
        }
        if let Some(description) = patch.description {
            bug.description = description;
        }
        if let Some(severity) = patch.severity {
            bug.severity = severity;
        }
        if let Some(status) = patch.status {
            bug.status = status;
        }
        if let Some(reporter) = patch.reporter {
            bug.reporter = reporter;
        }
        if let Some(assignee) = patch.assignee {
            bug.assignee = assignee.as_deref().and_then(normalize_assignee);
        }
        if let Some(tags) = patch.tags {
            bug.tags = tags;
        }
        bug.updated_at = next_update_stamp(bug.updated_at);

        info!("Updated bug {id}");
        Ok(bug)
    }

    pub fn set_status(&mut self, id: &str, status: Status) -> TrackerResult<&BugReport> {
        self.update(id, BugPatch::status(status))
    }

    /// Removes and returns the bug; absent ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Option<BugReport> {
        let Some(index) = self.bugs.iter().position(|bug| bug.id == id) else {
            debug!("Delete ignored, no bug with id {id}");
            return None;
        };
        info!("Deleted bug {id}");
        Some(self.bugs.remove(index))
    }

    /// Distinct assignees in order of first appearance.
    pub fn assignees(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for name in self.bugs.iter().filter_map(|bug| bug.assignee.as_deref()) {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    fn fresh_id(&self) -> String {
        loop {
            let candidate = uuid::Uuid::new_v4().to_string();
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

// Clock reads can repeat on coarse timers; updated_at must still move forward.
fn next_update_stamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
