use crate::chunker::{ChunkBudget, DEFAULT_MAX_LENGTH, DEFAULT_RESERVED_MARGIN};
use crate::error::SplitError;
use crate::formatter::SpecialFormat;
use crate::separator::NONE_ID;
use crate::session::SplitSession;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Persistent splitter options, loaded from a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub max_length: usize,
    pub reserved_margin: usize,
    pub separator: String,
    pub custom_separator: String,
    pub double_separator: bool,
    pub double_spacing: bool,
    pub special_format: SpecialFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            reserved_margin: DEFAULT_RESERVED_MARGIN,
            separator: NONE_ID.to_string(),
            custom_separator: String::new(),
            double_separator: false,
            double_spacing: false,
            special_format: SpecialFormat::default(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, SplitError> {
        let raw = fs::read_to_string(path).map_err(|source| SplitError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&raw).map_err(|source| SplitError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn budget(&self) -> ChunkBudget {
        ChunkBudget::new(self.max_length, self.reserved_margin)
    }

    /// Build a session with these options applied.
    ///
    /// Mode is set before the separator so the selection resolves against
    /// the right catalog list.
    pub fn into_session(self) -> SplitSession {
        let mut session = SplitSession::new().with_budget(self.budget());
        session.set_double_separator(self.double_separator);
        session.set_double_spacing(self.double_spacing);
        session.set_special_format(self.special_format);
        session.select_separator(&self.separator);
        session.set_custom_text(self.custom_separator);
        session
    }
}
