use crate::error::TrackerResult;
use crate::models::dashboard::ActiveView;
use log::warn;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_SCHEMA_VERSION: i64 = 2;
const SETTINGS_DIR: &str = ".buglab";
const LOG_FILTERS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const VIEWS: [&str; 8] = [
    "bugs",
    "overview",
    "unit",
    "integration",
    "e2e",
    "debugging",
    "deployment",
    "coverage",
];

#[derive(Debug, Clone)]
pub struct EffectiveSettings {
    pub seed_mock_data: bool,
    pub default_view: ActiveView,
    pub log_filter: String,
    pub remember_last_search: bool,
    pub last_search: String,
    /// Why the settings file was replaced with defaults, if it was.
    pub recovered: Option<String>,
}

pub fn get_settings(workspace_path: &Path) -> Result<Value, String> {
    load_settings_from_disk(workspace_path).map_err(|e| e.to_string())
}

pub fn save_settings(workspace_path: &Path, settings: Value) -> Result<Value, String> {
    save_settings_to_disk(workspace_path, settings).map_err(|e| e.to_string())
}

pub fn load_effective_settings(workspace_path: &Path) -> TrackerResult<EffectiveSettings> {
    let (settings, recovered) = read_settings(workspace_path)?;
    Ok(EffectiveSettings {
        recovered,
        ..effective_settings(&settings)
    })
}

pub fn effective_settings(settings: &Value) -> EffectiveSettings {
    let default_view = settings
        .get("defaultView")
        .and_then(Value::as_str)
        .and_then(|view| view.parse().ok())
        .unwrap_or_default();

    EffectiveSettings {
        seed_mock_data: settings
            .get("seedMockData")
            .and_then(Value::as_bool)
            .unwrap_or(true),
        default_view,
        log_filter: settings
            .get("logFilter")
            .and_then(Value::as_str)
            .unwrap_or("info")
            .to_string(),
        remember_last_search: settings
            .get("rememberLastSearch")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        last_search: settings
            .get("lastSearch")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        recovered: None,
    }
}

pub fn load_settings_from_disk(workspace_path: &Path) -> TrackerResult<Value> {
    let (settings, recovered) = read_settings(workspace_path)?;
    if let Some(reason) = recovered {
        warn!("{reason}");
    }
    Ok(settings)
}

// Unparseable JSON is replaced by defaults; the second value says why.
fn read_settings(workspace_path: &Path) -> TrackerResult<(Value, Option<String>)> {
    let path = settings_path(workspace_path);
    ensure_settings_dir(workspace_path)?;

    let mut recovered = None;
    let original = if path.exists() {
        let raw = fs::read_to_string(&path)?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(e) => {
                recovered = Some(format!("Ignoring unreadable {}: {e}", path.display()));
                json!({})
            }
        }
    } else {
        json!({})
    };

    let migrated = migrate_settings(original.clone());
    if migrated != original || !path.exists() {
        write_settings_file(&path, &migrated)?;
    }

    Ok((migrated, recovered))
}

pub fn save_settings_to_disk(workspace_path: &Path, settings: Value) -> TrackerResult<Value> {
    let path = settings_path(workspace_path);
    ensure_settings_dir(workspace_path)?;

    let mut merged = load_settings_from_disk(workspace_path).unwrap_or_else(|e| {
        warn!("Falling back to default settings: {e}");
        default_settings()
    });
    merge_settings(&mut merged, &settings);

    let migrated = migrate_settings(merged);
    write_settings_file(&path, &migrated)?;
    Ok(migrated)
}

fn settings_path(workspace_path: &Path) -> PathBuf {
    workspace_path.join(SETTINGS_DIR).join("settings.json")
}

fn ensure_settings_dir(workspace_path: &Path) -> TrackerResult<()> {
    fs::create_dir_all(workspace_path.join(SETTINGS_DIR))?;
    Ok(())
}

fn write_settings_file(path: &Path, settings: &Value) -> TrackerResult<()> {
    let raw = serde_json::to_string_pretty(settings)?;
    fs::write(path, raw)?;
    Ok(())
}

fn migrate_settings(input: Value) -> Value {
    let mut out = match input {
        Value::Object(map) => Value::Object(map),
        _ => Value::Object(Map::new()),
    };

    let version = out
        .get("schema_version")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    if version < 2 {
        // V1 stored the seeding switch as "mockData".
        rename_key(&mut out, "mockData", "seedMockData");
    }

    deep_merge_defaults(&mut out, &default_settings());
    sanitize_settings(&mut out);
    if let Some(obj) = out.as_object_mut() {
        obj.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));
    }

    out
}

fn default_settings() -> Value {
    json!({
        "schema_version": SETTINGS_SCHEMA_VERSION,
        "seedMockData": true,
        "defaultView": "bugs",
        "logFilter": "info",
        "rememberLastSearch": false,
        "lastSearch": ""
    })
}

fn deep_merge_defaults(target: &mut Value, defaults: &Value) {
    let (Some(target_obj), Some(default_obj)) = (target.as_object_mut(), defaults.as_object()) else {
        return;
    };

    for (key, default_value) in default_obj {
        match target_obj.get_mut(key) {
            Some(existing) => {
                if existing.is_object() && default_value.is_object() {
                    deep_merge_defaults(existing, default_value);
                }
            }
            None => {
                target_obj.insert(key.clone(), default_value.clone());
            }
        }
    }
}

fn rename_key(target: &mut Value, from: &str, to: &str) {
    let Some(obj) = target.as_object_mut() else {
        return;
    };
    if let Some(value) = obj.remove(from) {
        obj.entry(to.to_string()).or_insert(value);
    }
}

fn merge_settings(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target_obj), Value::Object(incoming_obj)) => {
            for (key, value) in incoming_obj {
                if let Some(existing) = target_obj.get_mut(key) {
                    merge_settings(existing, value);
                } else {
                    target_obj.insert(key.clone(), value.clone());
                }
            }
        }
        (target_slot, incoming_value) => {
            *target_slot = incoming_value.clone();
        }
    }
}

fn sanitize_settings(settings: &mut Value) {
    let Some(obj) = settings.as_object_mut() else {
        return;
    };

    sanitize_enum(obj, "defaultView", &VIEWS, "bugs");
    sanitize_enum(obj, "logFilter", &LOG_FILTERS, "info");

    ensure_bool(obj, "seedMockData", true);
    ensure_bool(obj, "rememberLastSearch", false);
    ensure_string(obj, "lastSearch", "");
}

fn sanitize_enum(map: &mut Map<String, Value>, key: &str, allowed: &[&str], default: &str) {
    let valid = map
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| allowed.contains(value))
        .unwrap_or(default);
    map.insert(key.to_string(), json!(valid));
}

fn ensure_bool(map: &mut Map<String, Value>, key: &str, default: bool) {
    let value = map.get(key).and_then(Value::as_bool).unwrap_or(default);
    map.insert(key.to_string(), json!(value));
}

fn ensure_string(map: &mut Map<String, Value>, key: &str, default: &str) {
    let value = map
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string();
    map.insert(key.to_string(), json!(value));
}
