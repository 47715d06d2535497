use thiserror::Error;

/// Errors of the fallible edges of the crate: settings files and JSON payloads.
/// The structure, formula, score and time functions themselves never fail.
#[derive(Debug, Error)]
pub enum ReactVizError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting '{name}': {reason}")]
    InvalidSetting { name: String, reason: String },
}
