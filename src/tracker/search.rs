use crate::models::bug::BugReport;
use crate::models::filter::{BugFilters, ViewQuery};
use log::debug;

/// Derive the visible bugs: search AND status AND severity AND assignee.
/// Relative order of `bugs` is preserved.
pub fn filter_bugs<'a>(bugs: &'a [BugReport], query: &ViewQuery) -> Vec<&'a BugReport> {
    let needle = query.search.to_lowercase();
    let visible: Vec<&BugReport> = bugs
        .iter()
        .filter(|bug| matches_search(bug, &needle) && matches_filters(bug, &query.filters))
        .collect();

    debug!(
        "Filtered view: {} of {} bugs (search={:?})",
        visible.len(),
        bugs.len(),
        query.search
    );
    visible
}

/// Case-insensitive substring match on title, description or any tag.
/// `needle` must already be lowercased; an empty needle matches everything.
pub fn matches_search(bug: &BugReport, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    bug.title.to_lowercase().contains(needle)
        || bug.description.to_lowercase().contains(needle)
        || bug.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

pub fn matches_filters(bug: &BugReport, filters: &BugFilters) -> bool {
    filters.status.accepts(&bug.status)
        && filters.severity.accepts(&bug.severity)
        && match &bug.assignee {
            Some(assignee) => filters.assignee.accepts(assignee),
            None => filters.assignee.is_all(),
        }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bug::{Severity, Status, TagSet};
    use crate::models::filter::Filter;
    use crate::tracker::seed::mock_bugs;
    use chrono::Utc;

    fn bug(id: &str, title: &str, status: Status, severity: Severity) -> BugReport {
        let now = Utc::now();
        BugReport {
            id: id.to_string(),
            title: title.to_string(),
            description: "Something went wrong".to_string(),
            severity,
            status,
            reporter: "Ann".to_string(),
            assignee: None,
            tags: TagSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn ids<'a>(bugs: &[&'a BugReport]) -> Vec<&'a str> {
        bugs.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn login_scenario_matches_case_insensitively() {
        let bugs = vec![
            bug("a", "Login bug", Status::Open, Severity::High),
            bug("b", "DB timeout", Status::InProgress, Severity::Critical),
        ];
        let query = ViewQuery {
            search: "login".to_string(),
            ..ViewQuery::default()
        };

        assert_eq!(ids(&filter_bugs(&bugs, &query)), vec!["a"]);
    }

    #[test]
    fn empty_query_and_no_filters_returns_everything_in_order() {
        let bugs = mock_bugs();
        let visible = filter_bugs(&bugs, &ViewQuery::default());
        assert_eq!(ids(&visible), vec!["1", "2", "3"]);
    }

    #[test]
    fn empty_collection_yields_empty_view() {
        let query = ViewQuery {
            search: "anything".to_string(),
            ..ViewQuery::default()
        };
        assert!(filter_bugs(&[], &query).is_empty());
    }

    #[test]
    fn search_covers_description_and_tags() {
        let bugs = mock_bugs();

        let by_description = ViewQuery {
            search: "PEAK HOURS".to_string(),
            ..ViewQuery::default()
        };
        assert_eq!(ids(&filter_bugs(&bugs, &by_description)), vec!["2"]);

        let by_tag = ViewQuery {
            search: "front".to_string(),
            ..ViewQuery::default()
        };
        assert_eq!(ids(&filter_bugs(&bugs, &by_tag)), vec!["1", "3"]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let bugs = mock_bugs();
        let query = ViewQuery {
            search: "frontend".to_string(),
            filters: BugFilters {
                status: Filter::Is(Status::Resolved),
                ..BugFilters::default()
            },
        };
        assert_eq!(ids(&filter_bugs(&bugs, &query)), vec!["3"]);

        let none = ViewQuery {
            search: "frontend".to_string(),
            filters: BugFilters {
                severity: Filter::Is(Severity::Critical),
                ..BugFilters::default()
            },
        };
        assert!(filter_bugs(&bugs, &none).is_empty());
    }

    #[test]
    fn assignee_filter_skips_unassigned_bugs() {
        let bugs = mock_bugs();
        let query = ViewQuery {
            filters: BugFilters {
                assignee: Filter::Is("Bob Wilson".to_string()),
                ..BugFilters::default()
            },
            ..ViewQuery::default()
        };
        assert_eq!(ids(&filter_bugs(&bugs, &query)), vec!["2"]);
    }

    #[test]
    fn result_is_an_ordered_subset_for_every_query_and_filter_combination() {
        let bugs = mock_bugs();
        for search in ["", "front", "PEAK", "zzz"] {
            let needle = search.to_lowercase();
            let statuses = std::iter::once(Filter::All).chain(Status::ALL.map(Filter::Is));
            for status in statuses {
                for severity in std::iter::once(Filter::All).chain(Severity::ALL.map(Filter::Is)) {
                    let query = ViewQuery {
                        search: search.to_string(),
                        filters: BugFilters {
                            status: status.clone(),
                            severity,
                            ..BugFilters::default()
                        },
                    };
                    let visible = filter_bugs(&bugs, &query);
                    let positions: Vec<usize> = visible
                        .iter()
                        .map(|v| bugs.iter().position(|b| b.id == v.id).unwrap())
                        .collect();
                    assert!(positions.windows(2).all(|w| w[0] < w[1]));

                    for candidate in &bugs {
                        let expected = matches_search(candidate, &needle)
                            && matches_filters(candidate, &query.filters);
                        let present = visible.iter().any(|v| v.id == candidate.id);
                        assert_eq!(expected, present, "search {search:?}, bug {}", candidate.id);
                    }
                }
            }
        }
    }
}
