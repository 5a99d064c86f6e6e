use crate::models::bug::BugReport;
use crate::models::docs::DocTab;
use crate::models::draft::BugForm;
use crate::models::filter::ViewQuery;
use crate::tracker::search::filter_bugs;
use crate::tracker::store::BugStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which panel the view layer shows: the bug list or one docs tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ActiveView {
    #[default]
    Bugs,
    Docs(DocTab),
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bugs => f.write_str("bugs"),
            Self::Docs(tab) => write!(f, "{tab}"),
        }
    }
}

impl FromStr for ActiveView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "bugs" {
            return Ok(Self::Bugs);
        }
        s.parse::<DocTab>()
            .map(Self::Docs)
            .map_err(|_| format!("Unknown view: {s}"))
    }
}

impl TryFrom<String> for ActiveView {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ActiveView> for String {
    fn from(view: ActiveView) -> Self {
        view.to_string()
    }
}

/// Everything one dashboard session owns. The command layer borrows it
/// mutably for the duration of a single invocation.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub store: BugStore,
    pub query: ViewQuery,
    pub form: Option<BugForm>,
    pub view: ActiveView,
    /// Workspace holding the settings file, when preferences should persist.
    pub workspace: Option<PathBuf>,
    pub remember_search: bool,
}

impl DashboardState {
    pub fn new(store: BugStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn visible_bugs(&self) -> Vec<&BugReport> {
        filter_bugs(self.store.bugs(), &self.query)
    }
}
