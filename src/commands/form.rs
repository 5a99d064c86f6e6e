use crate::commands::bugs::{create_bug, BugOutcome};
use crate::error::{TrackerError, TrackerResult};
use crate::models::dashboard::DashboardState;
use crate::models::draft::{BugForm, FormEdit};

pub fn open_form(state: &mut DashboardState) -> BugForm {
    let form = BugForm::default();
    state.form = Some(form.clone());
    form
}

pub fn cancel_form(state: &mut DashboardState) {
    state.form = None;
}

pub fn form_state(state: &DashboardState) -> Option<BugForm> {
    state.form.clone()
}

pub fn edit_form(state: &mut DashboardState, edit: FormEdit) -> TrackerResult<BugForm> {
    let form = open_form_mut(state)?;
    let draft = &mut form.draft;
    match edit {
        FormEdit::Title(title) => draft.title = title,
        FormEdit::Description(description) => draft.description = description,
        FormEdit::Severity(severity) => draft.severity = severity,
        FormEdit::Status(status) => draft.status = status,
        FormEdit::Reporter(reporter) => draft.reporter = reporter,
        FormEdit::Assignee(assignee) => draft.assignee = assignee,
    }
    Ok(form.clone())
}

/// Blank or duplicate tags are dropped without an error message.
pub fn add_tag(state: &mut DashboardState, tag: &str) -> TrackerResult<BugForm> {
    let form = open_form_mut(state)?;
    form.draft.tags.insert(tag);
    Ok(form.clone())
}

pub fn remove_tag(state: &mut DashboardState, tag: &str) -> TrackerResult<BugForm> {
    let form = open_form_mut(state)?;
    form.draft.tags.remove(tag);
    Ok(form.clone())
}

/// Validates the open draft. On success the bug is created and the form
/// closes; otherwise the form stays open with its field errors.
pub fn submit_form(state: &mut DashboardState) -> TrackerResult<BugOutcome> {
    let draft = open_form_mut(state)?.draft.clone();
    let outcome = create_bug(state, &draft);

    match &outcome {
        BugOutcome::Invalid { errors } => {
            if let Some(form) = state.form.as_mut() {
                form.errors = errors.clone();
            }
        }
        _ => state.form = None,
    }
    Ok(outcome)
}

fn open_form_mut(state: &mut DashboardState) -> TrackerResult<&mut BugForm> {
    state.form.as_mut().ok_or(TrackerError::FormClosed)
}
