use std::path::PathBuf;
use thiserror::Error;

/// Failures at the edges of the splitter: settings and input handling.
/// Chunking, formatting and separator resolution never fail.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Invalid special format: {0} (expected 1 or 2)")]
    InvalidSpecialFormat(u8),

    #[error("Failed to read settings file {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read input: {0}")]
    InputRead(#[from] std::io::Error),
}
