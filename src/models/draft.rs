use crate::models::bug::{Severity, Status, TagSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Raw form input for a new bug, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BugDraft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: Status,
    pub reporter: String,
    pub assignee: String,
    pub tags: TagSet,
}

/// A draft that passed validation, with free-text fields trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: Status,
    pub reporter: String,
    pub assignee: Option<String>,
    pub tags: TagSet,
}

/// Field name -> human readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Editable form session: the draft plus the errors of the last submit.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BugForm {
    pub draft: BugDraft,
    pub errors: FieldErrors,
}

/// Single-field edit sent by the view while the form is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FormEdit {
    Title(String),
    Description(String),
    Severity(Severity),
    Status(Status),
    Reporter(String),
    Assignee(String),
}
