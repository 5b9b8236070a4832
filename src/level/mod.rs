//! Level Descriptor Loader + Validator (§4.A, §4.B).

mod error;
mod raw;
mod validate;

pub use error::{LevelParseError, LevelValidationError};
pub use raw::{RawDescriptor, parse_descriptor};
pub use validate::{ValidatedLevel, validate};

use std::fs::File;
use std::path::Path;

/// Loads and validates a `.cub` descriptor from disk in one call, mirroring
/// the teacher's `Wad::from_file` entry point shape.
pub fn load_level<P: AsRef<Path>>(
    path: P,
) -> Result<ValidatedLevel, LevelLoadError> {
    let file = File::open(path)?;
    let raw = parse_descriptor(file)?;
    Ok(validate(raw)?)
}

/// Union of the two failure classes a full load can hit, convenient for
/// callers that don't need to distinguish parse- from validation-stage
/// errors until they map them to an exit code.
#[derive(Debug, thiserror::Error)]
pub enum LevelLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] LevelParseError),

    #[error(transparent)]
    Validation(#[from] LevelValidationError),
}
