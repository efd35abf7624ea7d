use crate::error::SplitError;
use crate::separator::{BLANK_ID, SeparatorMode};
use serde::{Deserialize, Serialize};

/// Layout used when both separators are the blank marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SpecialFormat {
    /// Marker, chunk and marker on consecutive lines
    #[default]
    Tight = 1,
    /// Blank lines between the markers and the chunk
    Spaced = 2,
}

impl TryFrom<u8> for SpecialFormat {
    type Error = SplitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SpecialFormat::Tight),
            2 => Ok(SpecialFormat::Spaced),
            other => Err(SplitError::InvalidSpecialFormat(other)),
        }
    }
}

impl From<SpecialFormat> for u8 {
    fn from(format: SpecialFormat) -> Self {
        format as u8
    }
}

/// Formatting switches, rebuilt from the current options on every run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Prefix and suffix (true) or suffix only (false)
    pub double_separator: bool,
    /// Blank line (true) or single space (false) between separator and text
    pub double_spacing: bool,
    /// Only consulted in blank-marker mode
    pub special_format: SpecialFormat,
}

impl FormatConfig {
    pub fn mode(&self) -> SeparatorMode {
        SeparatorMode::from_double(self.double_separator)
    }

    /// Whether the special-format choice applies to this selection
    pub fn special_format_available(&self, selection: &str) -> bool {
        self.double_separator && self.double_spacing && selection == BLANK_ID
    }
}
