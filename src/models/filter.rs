use crate::models::bug::{double_option, Severity, Status};
use serde::{Deserialize, Serialize};

/// One categorical filter. `All` disables the predicate; on the wire it is
/// `null` (or a missing key), so no real field value can collide with it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<T>", into = "Option<T>")]
pub enum Filter<T: Clone> {
    #[default]
    All,
    Is(T),
}

impl<T: Clone + PartialEq> Filter<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Is(wanted) => wanted == value,
        }
    }
}

impl<T: Clone> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Is)
    }
}

impl<T: Clone> From<Filter<T>> for Option<T> {
    fn from(filter: Filter<T>) -> Self {
        match filter {
            Filter::All => None,
            Filter::Is(value) => Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BugFilters {
    pub status: Filter<Status>,
    pub severity: Filter<Severity>,
    pub assignee: Filter<String>,
}

impl BugFilters {
    pub fn is_cleared(&self) -> bool {
        self.status.is_all() && self.severity.is_all() && self.assignee.is_all()
    }

    pub fn apply(&mut self, changes: FilterChanges) {
        if let Some(status) = changes.status {
            self.status = status.into();
        }
        if let Some(severity) = changes.severity {
            self.severity = severity.into();
        }
        if let Some(assignee) = changes.assignee {
            self.assignee = assignee.into();
        }
    }
}

/// Filter edits from the view layer. A missing key keeps the current filter,
/// `null` resets it to all, and a value selects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterChanges {
    #[serde(with = "double_option", skip_serializing_if = "Option::is_none")]
    pub status: Option<Option<Status>>,
    #[serde(with = "double_option", skip_serializing_if = "Option::is_none")]
    pub severity: Option<Option<Severity>>,
    #[serde(with = "double_option", skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Option<String>>,
}

/// Search text plus filters: everything the filtered view derives from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewQuery {
    pub search: String,
    pub filters: BugFilters,
}
