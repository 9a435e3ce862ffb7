use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the settings store and the platform strategies
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed JSON in {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not serialize settings for {}: {}", .path.display(), .source)]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} failed for {}: {}", .op, .path.display(), .source)]
    Io {
        op: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings document: {}", .errors.join("; "))]
    Validate { errors: Vec<String> },

    #[error("settings not loaded; call load first")]
    NotLoaded,

    #[error("desktop notifications are not supported on {os}")]
    UnsupportedPlatform { os: String },

    #[error("invalid notification message: {reason}")]
    CommandBuild { reason: String },

    #[error("generated command failed the safety check: {command}")]
    CommandRejected { command: String },

    #[error("could not determine home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, Error>;
