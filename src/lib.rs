pub mod commands;
pub mod error;
pub mod models;
pub mod tracker;

use commands::ipc::serve;
use commands::settings::{load_effective_settings, EffectiveSettings};
use log::{info, warn};
use models::dashboard::DashboardState;
use std::path::PathBuf;
use tracker::store::BugStore;

/// Startup options resolved by the binary.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub workspace: PathBuf,
    pub seed: bool,
}

/// Build the initial session from persisted preferences.
pub fn build_state(settings: &EffectiveSettings, options: &RunOptions) -> DashboardState {
    let store = if options.seed && settings.seed_mock_data {
        BugStore::seeded()
    } else {
        BugStore::new()
    };

    let mut state = DashboardState::new(store);
    state.view = settings.default_view;
    state.workspace = Some(options.workspace.clone());
    state.remember_search = settings.remember_last_search;
    if settings.remember_last_search {
        state.query.search = settings.last_search.clone();
    }
    state
}

/// Serve the JSON command bridge on stdin/stdout until stdin closes.
pub fn run(options: RunOptions, settings: EffectiveSettings) -> Result<(), String> {
    if let Some(reason) = &settings.recovered {
        warn!("{reason}");
    }

    let mut state = build_state(&settings, &options);
    info!(
        "BugLab ready: {} bugs, view {}, workspace {}",
        state.store.len(),
        state.view,
        options.workspace.display()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    serve(&mut state, stdin.lock(), stdout.lock())
        .map_err(|e| format!("Command bridge I/O error: {e}"))
}

/// Load settings for `workspace`, creating the settings file when missing.
pub fn load_settings(workspace: &std::path::Path) -> Result<EffectiveSettings, String> {
    load_effective_settings(workspace)
        .map_err(|e| format!("Failed to load settings from {}: {e}", workspace.display()))
}
