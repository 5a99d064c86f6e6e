use crate::models::draft::{BugDraft, FieldErrors, ValidDraft};

pub const TITLE_MIN_CHARS: usize = 5;
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// Check every field of a new-bug draft. All violations are collected; on
/// success the returned draft has its free-text fields trimmed.
pub fn validate_draft(draft: &BugDraft) -> Result<ValidDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    check_text(
        &mut errors,
        "title",
        &draft.title,
        TITLE_MIN_CHARS,
        "Title is required",
        "Title must be at least 5 characters",
    );
    check_text(
        &mut errors,
        "description",
        &draft.description,
        DESCRIPTION_MIN_CHARS,
        "Description is required",
        "Description must be at least 10 characters",
    );
    if draft.reporter.trim().is_empty() {
        errors.insert("reporter", "Reporter name is required");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidDraft {
        title: draft.title.trim().to_string(),
        description: draft.description.trim().to_string(),
        severity: draft.severity,
        status: draft.status,
        reporter: draft.reporter.trim().to_string(),
        assignee: normalize_assignee(&draft.assignee),
        tags: draft.tags.clone(),
    })
}

/// Blank assignee text means "unassigned".
pub fn normalize_assignee(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn check_text(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    min_chars: usize,
    required_message: &str,
    short_message: &str,
) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, required_message);
    } else if trimmed.chars().count() < min_chars {
        errors.insert(field, short_message);
    }
}
