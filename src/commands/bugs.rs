use crate::models::bug::{BugPatch, BugReport, Status};
use crate::models::dashboard::DashboardState;
use crate::models::draft::{BugDraft, FieldErrors};
use crate::models::stats::BugStats;
use crate::tracker::stats::compute_stats;
use crate::tracker::validation::validate_draft;
use log::debug;
use serde::Serialize;
use serde_json::Value;

/// Result of a store mutation as reported to the view layer. Validation
/// failures and unknown ids are outcomes, not command errors.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BugOutcome {
    Created { bug: BugReport },
    Updated { bug: BugReport },
    Deleted { id: String },
    Invalid { errors: FieldErrors },
    NotFound { id: String },
}

pub fn list_bugs(state: &DashboardState) -> Vec<BugReport> {
    state.store.bugs().to_vec()
}

pub fn get_bug(state: &DashboardState, id: &str) -> Option<BugReport> {
    state.store.get(id).cloned()
}

pub fn create_bug(state: &mut DashboardState, draft: &BugDraft) -> BugOutcome {
    match validate_draft(draft) {
        Ok(valid) => BugOutcome::Created {
            bug: state.store.create(valid).clone(),
        },
        Err(errors) => {
            debug!("Draft rejected: {errors}");
            BugOutcome::Invalid { errors }
        }
    }
}

pub fn update_bug(state: &mut DashboardState, id: &str, patch: BugPatch) -> BugOutcome {
    match state.store.update(id, patch) {
        Ok(bug) => BugOutcome::Updated { bug: bug.clone() },
        Err(err) => {
            debug!("Update ignored: {err}");
            BugOutcome::NotFound { id: id.to_string() }
        }
    }
}

pub fn change_status(state: &mut DashboardState, id: &str, status: Status) -> BugOutcome {
    update_bug(state, id, BugPatch::status(status))
}

pub fn delete_bug(state: &mut DashboardState, id: &str) -> BugOutcome {
    match state.store.delete(id) {
        Some(bug) => BugOutcome::Deleted { id: bug.id },
        None => BugOutcome::NotFound { id: id.to_string() },
    }
}

pub fn bug_stats(state: &DashboardState) -> BugStats {
    compute_stats(state.store.bugs())
}

/// Operation-keyed entry point: create, read, list, update, delete.
pub fn bug_crud(
    state: &mut DashboardState,
    operation: &str,
    draft: Option<BugDraft>,
    patch: Option<BugPatch>,
    id: Option<String>,
) -> Result<Value, String> {
    match operation {
        "create" => {
            let draft = draft.ok_or("Draft required for create")?;
            to_value(create_bug(state, &draft))
        }
        "read" => {
            let id = id.ok_or("ID required for read")?;
            to_value(get_bug(state, &id))
        }
        "list" => to_value(list_bugs(state)),
        "update" => {
            let id = id.ok_or("ID required for update")?;
            let patch = patch.ok_or("Patch required for update")?;
            to_value(update_bug(state, &id, patch))
        }
        "delete" => {
            let id = id.ok_or("ID required for delete")?;
            to_value(delete_bug(state, &id))
        }
        _ => Err(format!("Unknown operation: {operation}")),
    }
}

pub(crate) fn to_value<T: Serialize>(value: T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| format!("Serialization error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::store::BugStore;
    use serde_json::json;

    fn seeded() -> DashboardState {
        DashboardState::new(BugStore::seeded())
    }

    #[test]
    fn invalid_create_leaves_store_untouched() {
        let mut state = seeded();
        let draft = BugDraft {
            title: "Bug".to_string(),
            ..BugDraft::default()
        };

        let outcome = to_value(create_bug(&mut state, &draft)).unwrap();
        assert_eq!(outcome["status"], json!("invalid"));
        assert_eq!(
            outcome["errors"]["title"],
            json!("Title must be at least 5 characters")
        );
        assert_eq!(state.store.len(), 3);
    }

    #[test]
    fn crud_round_trip() {
        let mut state = seeded();
        let draft = BugDraft {
            title: "Crash on save".to_string(),
            description: "Editor crashes when saving".to_string(),
            reporter: "Ann".to_string(),
            ..BugDraft::default()
        };

        let created = bug_crud(&mut state, "create", Some(draft), None, None).unwrap();
        assert_eq!(created["status"], json!("created"));
        let id = created["bug"]["id"].as_str().unwrap().to_string();

        let read = bug_crud(&mut state, "read", None, None, Some(id.clone())).unwrap();
        assert_eq!(read["title"], json!("Crash on save"));
        assert_eq!(read["createdAt"], read["updatedAt"]);

        let updated = bug_crud(
            &mut state,
            "update",
            None,
            Some(BugPatch::status(Status::Closed)),
            Some(id.clone()),
        )
        .unwrap();
        assert_eq!(updated["bug"]["status"], json!("closed"));

        let deleted = bug_crud(&mut state, "delete", None, None, Some(id.clone())).unwrap();
        assert_eq!(deleted, json!({ "status": "deleted", "id": id }));

        let listed = bug_crud(&mut state, "list", None, None, None).unwrap();
        assert_eq!(listed.as_array().unwrap().len(), 3);
    }

    #[test]
    fn missing_ids_are_not_errors() {
        let mut state = seeded();
        let outcome = to_value(change_status(&mut state, "404", Status::Closed)).unwrap();
        assert_eq!(outcome, json!({ "status": "not_found", "id": "404" }));

        let outcome = to_value(delete_bug(&mut state, "404")).unwrap();
        assert_eq!(outcome["status"], json!("not_found"));
        assert_eq!(state.store.len(), 3);
    }

    #[test]
    fn unknown_operation_is_rejected() {
        let mut state = seeded();
        let err = bug_crud(&mut state, "archive", None, None, None).unwrap_err();
        assert_eq!(err, "Unknown operation: archive");
    }
}
