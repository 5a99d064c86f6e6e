use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Bug not found: {0}")]
    NotFound(String),
    #[error("Unknown documentation tab: {0}")]
    UnknownTab(String),
    #[error("No bug form is open")]
    FormClosed,
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),
    #[error("Settings format error: {0}")]
    SettingsFormat(#[from] serde_json::Error),
}

pub type TrackerResult<T> = std::result::Result<T, TrackerError>;
