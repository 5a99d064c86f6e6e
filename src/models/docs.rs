use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocTab {
    Overview,
    Unit,
    Integration,
    E2e,
    Debugging,
    Deployment,
    Coverage,
}

impl DocTab {
    pub const ALL: [DocTab; 7] = [
        Self::Overview,
        Self::Unit,
        Self::Integration,
        Self::E2e,
        Self::Debugging,
        Self::Deployment,
        Self::Coverage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Unit => "unit",
            Self::Integration => "integration",
            Self::E2e => "e2e",
            Self::Debugging => "debugging",
            Self::Deployment => "deployment",
            Self::Coverage => "coverage",
        }
    }
}

impl fmt::Display for DocTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("Unknown documentation tab: {s}"))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeSnippet {
    pub id: &'static str,
    pub title: &'static str,
    pub language: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocSection {
    pub tab: DocTab,
    pub title: &'static str,
    pub summary: &'static str,
    pub snippets: Vec<CodeSnippet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteResult {
    pub passed: u32,
    pub failed: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuiteSummary {
    pub unit: SuiteResult,
    pub integration: SuiteResult,
    pub e2e: SuiteResult,
    pub coverage_percent: u8,
}
