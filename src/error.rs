//! Crate-level error types.

use std::fmt;

/// Errors produced by the bucky crate.
#[derive(Debug)]
pub enum BuckyError {
    /// A molecule tag that names none of the supported cages.
    UnknownMolecule(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Geometry export (JSON serialization) failure.
    Export(String),
}

impl fmt::Display for BuckyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMolecule(tag) => {
                write!(f, "unknown molecule '{tag}' (expected c60, c70 or c84)")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Export(msg) => write!(f, "export error: {msg}"),
        }
    }
}

impl std::error::Error for BuckyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BuckyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for BuckyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Export(e.to_string())
    }
}
