use crate::commands::settings::save_settings_to_disk;
use crate::models::bug::BugReport;
use crate::models::dashboard::{ActiveView, DashboardState};
use crate::models::filter::{BugFilters, FilterChanges, ViewQuery};
use log::warn;
use serde_json::json;

pub fn filtered_bugs(state: &DashboardState) -> Vec<BugReport> {
    state.visible_bugs().into_iter().cloned().collect()
}

pub fn set_search(state: &mut DashboardState, search: String) -> Vec<BugReport> {
    if state.remember_search {
        if let Some(workspace) = &state.workspace {
            if let Err(e) = save_settings_to_disk(workspace, json!({ "lastSearch": search })) {
                warn!("Could not remember search text: {e}");
            }
        }
    }
    state.query.search = search;
    filtered_bugs(state)
}

/// Applies only the filters named in `changes`; the others stay as they are.
pub fn set_filters(state: &mut DashboardState, changes: FilterChanges) -> Vec<BugReport> {
    state.query.filters.apply(changes);
    filtered_bugs(state)
}

/// Resets the three categorical filters; the search text is kept.
pub fn clear_filters(state: &mut DashboardState) -> Vec<BugReport> {
    state.query.filters = BugFilters::default();
    filtered_bugs(state)
}

pub fn current_query(state: &DashboardState) -> ViewQuery {
    state.query.clone()
}

pub fn list_assignees(state: &DashboardState) -> Vec<String> {
    state
        .store
        .assignees()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn set_view(state: &mut DashboardState, view: ActiveView) -> ActiveView {
    state.view = view;
    state.view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bug::{Severity, Status};
    use crate::models::docs::DocTab;
    use crate::models::filter::Filter;
    use crate::tracker::store::BugStore;

    fn titles(bugs: &[BugReport]) -> Vec<&str> {
        bugs.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn clear_filters_keeps_search_text() {
        let mut state = DashboardState::new(BugStore::seeded());
        set_search(&mut state, "frontend".to_string());
        let narrowed = set_filters(
            &mut state,
            FilterChanges {
                severity: Some(Some(Severity::Low)),
                ..FilterChanges::default()
            },
        );
        assert_eq!(titles(&narrowed), vec!["UI button misalignment on mobile"]);

        let cleared = clear_filters(&mut state);
        assert_eq!(cleared.len(), 2);
        assert_eq!(current_query(&state).search, "frontend");
        assert!(current_query(&state).filters.is_cleared());
    }

    #[test]
    fn view_recomputes_after_store_changes() {
        let mut state = DashboardState::new(BugStore::seeded());
        set_filters(
            &mut state,
            FilterChanges {
                status: Some(Some(Status::Open)),
                ..FilterChanges::default()
            },
        );
        assert_eq!(filtered_bugs(&state).len(), 1);

        state.store.set_status("2", Status::Open).unwrap();
        let ids: Vec<String> = filtered_bugs(&state).into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn changing_one_filter_keeps_the_others() {
        let mut state = DashboardState::new(BugStore::seeded());
        set_filters(
            &mut state,
            FilterChanges {
                assignee: Some(Some("Jane Smith".to_string())),
                ..FilterChanges::default()
            },
        );
        let narrowed = set_filters(
            &mut state,
            FilterChanges {
                status: Some(Some(Status::Resolved)),
                ..FilterChanges::default()
            },
        );
        assert!(narrowed.is_empty());
        assert_eq!(
            current_query(&state).filters.assignee,
            Filter::Is("Jane Smith".to_string())
        );

        let widened = set_filters(
            &mut state,
            FilterChanges {
                assignee: Some(None),
                ..FilterChanges::default()
            },
        );
        assert_eq!(titles(&widened), vec!["UI button misalignment on mobile"]);
    }

    #[test]
    fn remembered_search_is_written_to_settings() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut state = DashboardState::new(BugStore::seeded());
        state.workspace = Some(dir.path().to_path_buf());
        state.remember_search = true;

        set_search(&mut state, "timeout".to_string());

        let saved = crate::commands::settings::load_settings_from_disk(dir.path()).unwrap();
        assert_eq!(saved["lastSearch"], json!("timeout"));
    }

    #[test]
    fn switching_views() {
        let mut state = DashboardState::default();
        assert_eq!(state.view, ActiveView::Bugs);
        assert_eq!(
            set_view(&mut state, ActiveView::Docs(DocTab::Unit)),
            ActiveView::Docs(DocTab::Unit)
        );
        assert_eq!(set_view(&mut state, ActiveView::Bugs), ActiveView::Bugs);
    }

    #[test]
    fn assignees_exclude_unassigned() {
        let state = DashboardState::new(BugStore::seeded());
        assert_eq!(list_assignees(&state), vec!["Jane Smith", "Bob Wilson"]);
    }
}
