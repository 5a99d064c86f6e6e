use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| format!("Unknown severity: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    pub const ALL: [Status; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown status: {s}"))
    }
}

/// Ordered, duplicate-free tag list. Duplicate detection is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims `candidate` and appends it. Blank or already-present tags are
    /// ignored; the return value says whether the set changed.
    pub fn insert(&mut self, candidate: &str) -> bool {
        let tag = candidate.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|existing| existing == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for TagSet {
    fn from(raw: Vec<String>) -> Self {
        let mut tags = TagSet::new();
        for tag in &raw {
            tags.insert(tag);
        }
        tags
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.0
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tags = TagSet::new();
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugReport {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: Status,
    pub reporter: String,
    pub assignee: Option<String>,
    pub tags: TagSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial change set for an existing bug. `None` leaves a field untouched;
/// `assignee: Some(None)` unassigns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BugPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<Severity>,
    pub status: Option<Status>,
    pub reporter: Option<String>,
    #[serde(with = "double_option", skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Option<String>>,
    pub tags: Option<TagSet>,
}

impl BugPatch {
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// Distinguishes an absent key from an explicit `null`.
pub(crate) mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        assert_eq!(serde_json::to_value(Status::InProgress).unwrap(), json!("in-progress"));
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert!("in_progress".parse::<Status>().is_err());
    }

    #[test]
    fn severity_orders_by_impact() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::High < Severity::Critical);
        assert_eq!(Severity::default(), Severity::Medium);
    }

    #[test]
    fn tag_set_rejects_blank_and_case_sensitive_duplicates() {
        let mut tags = TagSet::new();
        assert!(tags.insert(" frontend "));
        assert!(!tags.insert("frontend"));
        assert!(!tags.insert("   "));
        assert!(tags.insert("Frontend"));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["frontend", "Frontend"]);
    }

    #[test]
    fn tag_set_deserializes_without_duplicates() {
        let tags: TagSet = serde_json::from_value(json!(["ui", "ui", "mobile"])).unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn patch_distinguishes_missing_and_null_assignee() {
        let missing: BugPatch = serde_json::from_value(json!({ "status": "closed" })).unwrap();
        assert_eq!(missing.assignee, None);
        assert_eq!(missing.status, Some(Status::Closed));

        let cleared: BugPatch = serde_json::from_value(json!({ "assignee": null })).unwrap();
        assert_eq!(cleared.assignee, Some(None));
    }
}
