use crate::models::docs::{DocSection, TestSuiteSummary};
use crate::tracker::docs::{catalog, find_section, TEST_SUMMARY};

pub fn docs_catalog() -> Vec<DocSection> {
    catalog()
}

pub fn docs_section(id: &str) -> Result<DocSection, String> {
    find_section(id).map_err(|e| e.to_string())
}

pub fn test_summary() -> TestSuiteSummary {
    TEST_SUMMARY
}
