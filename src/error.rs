//! Crate-wide error kind and the exit-code mapping from §6/§7 of the design.

use std::process::ExitCode;

use crate::level::{LevelLoadError, LevelParseError, LevelValidationError};

/// Top-level failure, tagged with the [`ExitCode`] the CLI must report.
#[derive(Debug, thiserror::Error)]
pub enum RayError {
    #[error("usage: raydoom <level.cub>")]
    Usage,

    #[error("bad level path: {0}")]
    BadExtension(String),

    #[error("cannot read level file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] LevelParseError),

    #[error(transparent)]
    Validation(#[from] LevelValidationError),

    #[error("resource acquisition failed: {0}")]
    Resource(#[from] anyhow::Error),

    #[error("texture decode failed: {0}")]
    Decode(#[from] crate::decode::DecodeError),
}

impl From<LevelLoadError> for RayError {
    fn from(err: LevelLoadError) -> Self {
        match err {
            LevelLoadError::Io(e) => RayError::Io(e),
            LevelLoadError::Parse(e) => RayError::Parse(e),
            LevelLoadError::Validation(e) => RayError::Validation(e),
        }
    }
}

impl RayError {
    /// Maps a failure to the process exit code mandated by §6.
    pub fn exit_code(&self) -> ExitCode {
        let code = match self {
            RayError::Usage => 1,
            RayError::BadExtension(_) => 2,
            RayError::Io(_) => 2,
            RayError::Parse(_) => 4,
            RayError::Validation(_) => 5,
            RayError::Resource(_) => 6,
            RayError::Decode(_) => 6,
        };
        ExitCode::from(code)
    }
}
