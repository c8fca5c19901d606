//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration directory unavailable: {path}")]
    ConfigDirUnavailable { path: PathBuf },

    #[error("Preference store error: {message}")]
    Preferences { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn preferences(message: impl Into<String>) -> Self {
        Self::Preferences {
            message: message.into(),
        }
    }

    pub fn config_dir_unavailable(path: impl Into<PathBuf>) -> Self {
        Self::ConfigDirUnavailable { path: path.into() }
    }

    /// Check if this is a recoverable error
    ///
    /// Preference failures never stop the page; the in-memory state stays
    /// authoritative.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Preferences { .. }
                | Error::TomlSerialize(_)
                | Error::Config { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context
// ─────────────────────────────────────────────────────────────────

/// Log a failure with a short description before propagating it
pub trait ResultExt<T> {
    fn context(self, what: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, what: &str) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", what, err);
            err
        })
    }
}
