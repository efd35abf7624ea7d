mod config;
mod layout;

#[cfg(test)]
mod tests;

pub use config::{FormatConfig, SpecialFormat};
pub use layout::{Position, format, format_chunk};
