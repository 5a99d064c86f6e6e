//! JSON command bridge between the view layer and the dashboard state.
//!
//! One invocation per line in, one response per line out:
//! `{"cmd": "set_search", "args": {"search": "login"}}` answers with
//! `{"ok": [...]}` or `{"error": "..."}`.

use crate::commands::bugs::{self, to_value};
use crate::commands::{docs, form, settings, view};
use crate::models::bug::{BugPatch, Status};
use crate::models::dashboard::{ActiveView, DashboardState};
use crate::models::draft::{BugDraft, FormEdit};
use crate::models::filter::FilterChanges;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Deserialize)]
pub struct Invocation {
    pub cmd: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Ok(Value),
    Error(String),
}

impl From<Result<Value, String>> for Response {
    fn from(result: Result<Value, String>) -> Self {
        match result {
            Ok(value) => Response::Ok(value),
            Err(message) => Response::Error(message),
        }
    }
}

#[derive(Deserialize)]
struct IdArgs {
    id: String,
}

#[derive(Deserialize)]
struct CrudArgs {
    operation: String,
    draft: Option<BugDraft>,
    patch: Option<BugPatch>,
    id: Option<String>,
}

#[derive(Deserialize)]
struct UpdateArgs {
    id: String,
    patch: BugPatch,
}

#[derive(Deserialize)]
struct StatusArgs {
    id: String,
    status: Status,
}

#[derive(Deserialize)]
struct SearchArgs {
    search: String,
}

#[derive(Deserialize)]
struct TagArgs {
    tag: String,
}

#[derive(Deserialize)]
struct ViewArgs {
    view: ActiveView,
}

#[derive(Deserialize)]
struct SettingsArgs {
    settings: Value,
}

/// Route one invocation to its command.
pub fn dispatch(state: &mut DashboardState, invocation: Invocation) -> Result<Value, String> {
    debug!("Invoking {}", invocation.cmd);
    let args = invocation.args;

    match invocation.cmd.as_str() {
        "list_bugs" => to_value(bugs::list_bugs(state)),
        "get_bug" => {
            let IdArgs { id } = parse_args(args)?;
            to_value(bugs::get_bug(state, &id))
        }
        "bug_crud" => {
            let CrudArgs {
                operation,
                draft,
                patch,
                id,
            } = parse_args(args)?;
            bugs::bug_crud(state, &operation, draft, patch, id)
        }
        "update_bug" => {
            let UpdateArgs { id, patch } = parse_args(args)?;
            to_value(bugs::update_bug(state, &id, patch))
        }
        "change_status" => {
            let StatusArgs { id, status } = parse_args(args)?;
            to_value(bugs::change_status(state, &id, status))
        }
        "delete_bug" => {
            let IdArgs { id } = parse_args(args)?;
            to_value(bugs::delete_bug(state, &id))
        }
        "bug_stats" => to_value(bugs::bug_stats(state)),
        "filtered_bugs" => to_value(view::filtered_bugs(state)),
        "set_search" => {
            let SearchArgs { search } = parse_args(args)?;
            to_value(view::set_search(state, search))
        }
        "set_filters" => {
            let changes: FilterChanges = parse_args(args)?;
            to_value(view::set_filters(state, changes))
        }
        "clear_filters" => to_value(view::clear_filters(state)),
        "current_query" => to_value(view::current_query(state)),
        "list_assignees" => to_value(view::list_assignees(state)),
        "set_view" => {
            let ViewArgs { view: target } = parse_args(args)?;
            to_value(view::set_view(state, target))
        }
        "open_form" => to_value(form::open_form(state)),
        "edit_form" => {
            let edit: FormEdit = parse_args(args)?;
            form::edit_form(state, edit)
                .map_err(|e| e.to_string())
                .and_then(to_value)
        }
        "add_tag" => {
            let TagArgs { tag } = parse_args(args)?;
            form::add_tag(state, &tag)
                .map_err(|e| e.to_string())
                .and_then(to_value)
        }
        "remove_tag" => {
            let TagArgs { tag } = parse_args(args)?;
            form::remove_tag(state, &tag)
                .map_err(|e| e.to_string())
                .and_then(to_value)
        }
        "submit_form" => form::submit_form(state)
            .map_err(|e| e.to_string())
            .and_then(to_value),
        "cancel_form" => {
            form::cancel_form(state);
            Ok(json!({ "status": "cancelled" }))
        }
        "form_state" => to_value(form::form_state(state)),
        "docs_catalog" => to_value(docs::docs_catalog()),
        "docs_section" => {
            let IdArgs { id } = parse_args(args)?;
            docs::docs_section(&id).and_then(to_value)
        }
        "test_summary" => to_value(docs::test_summary()),
        "get_settings" => {
            let workspace = state.workspace.as_deref().ok_or("No workspace configured")?;
            settings::get_settings(workspace)
        }
        "save_settings" => {
            let workspace = state.workspace.as_deref().ok_or("No workspace configured")?;
            let SettingsArgs { settings: incoming } = parse_args(args)?;
            settings::save_settings(workspace, incoming)
        }
        other => Err(format!("Unknown command: {other}")),
    }
}

/// Parse and dispatch one raw line. Malformed JSON is reported, not fatal.
pub fn handle_line(state: &mut DashboardState, line: &str) -> Response {
    match serde_json::from_str::<Invocation>(line) {
        Ok(invocation) => dispatch(state, invocation).into(),
        Err(e) => Response::Error(format!("Malformed invocation: {e}")),
    }
}

/// Serve invocations until `input` is exhausted. Only I/O failures end the
/// loop; lines that are not UTF-8 get an error response like any other
/// malformed invocation.
pub fn serve<R: BufRead, W: Write>(
    state: &mut DashboardState,
    mut input: R,
    mut output: W,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_line(state, line),
            Err(_) => Response::Error("Malformed invocation: invalid UTF-8".to_string()),
        };
        if let Response::Error(message) = &response {
            warn!("Command failed: {message}");
        }

        let encoded = serde_json::to_string(&response).map_err(std::io::Error::other)?;
        writeln!(output, "{encoded}")?;
        output.flush()?;
    }
    Ok(())
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, String> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::store::BugStore;

    #[test]
    fn unknown_command_is_an_error_response() {
        let mut state = DashboardState::default();
        let response = handle_line(&mut state, r#"{"cmd":"explode"}"#);
        assert_eq!(response, Response::Error("Unknown command: explode".to_string()));
    }

    #[test]
    fn malformed_line_does_not_stop_the_loop() {
        let mut state = DashboardState::new(BugStore::seeded());
        let input = "not json\n\n{\"cmd\":\"bug_stats\"}\n";
        let mut output = Vec::new();

        serve(&mut state, input.as_bytes(), &mut output).unwrap();

        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0]["error"].as_str().unwrap().starts_with("Malformed invocation"));
        assert_eq!(lines[1]["ok"]["total"], json!(3));
    }

    #[test]
    fn invalid_utf8_line_is_answered_and_skipped() {
        let mut state = DashboardState::new(BugStore::seeded());
        let input: &[u8] = b"{\"cmd\":\"bug_stats\"}\n\
{\"cmd\":\"set_search\",\"args\":{\"search\":\"\xff\"}}\n\
{\"cmd\":\"bug_stats\"}\n";
        let mut output = Vec::new();

        serve(&mut state, input, &mut output).unwrap();

        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["ok"]["total"], json!(3));
        assert_eq!(lines[1]["error"], json!("Malformed invocation: invalid UTF-8"));
        assert_eq!(lines[2]["ok"]["total"], json!(3));
        assert!(state.query.search.is_empty());
    }

    #[test]
    fn bad_arguments_are_reported() {
        let mut state = DashboardState::new(BugStore::seeded());
        let response = handle_line(
            &mut state,
            r#"{"cmd":"change_status","args":{"id":"1","status":"done"}}"#,
        );
        let Response::Error(message) = response else {
            panic!("expected error");
        };
        assert!(message.starts_with("Invalid arguments"));
    }

    #[test]
    fn settings_require_a_workspace() {
        let mut state = DashboardState::default();
        let response = handle_line(&mut state, r#"{"cmd":"get_settings"}"#);
        assert_eq!(response, Response::Error("No workspace configured".to_string()));
    }
}
