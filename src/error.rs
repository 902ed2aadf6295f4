//! Error types for boundary operations.
//!
//! Internal engine phases (extraction, resolution, call filtering, rule
//! evaluation) never fail — per the error-handling design, an unmatched
//! query degrades to an empty/default value and the pipeline continues.
//! `StereoError` exists only for the boundary operations that the core
//! does expose: loading user-supplied classifier extension files and
//! validating engine configuration.

use thiserror::Error;

/// Errors that can occur at the configuration/option-loading boundary.
#[derive(Debug, Error)]
pub enum StereoError {
    /// A user-supplied option file was named but could not be read.
    #[error("could not read option file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An option file was readable but its contents were not well-formed.
    #[error("invalid option file {path}: {reason}")]
    InvalidOptionFile { path: String, reason: String },

    /// A caller requested a language tag this engine does not recognize.
    #[error("unknown language tag: {0}")]
    UnknownLanguage(String),

    /// Catch-all for CLI-adjacent misconfiguration (e.g. a threshold of 0).
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StereoError>;
