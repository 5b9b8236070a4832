//! Error taxonomy for the Level Descriptor Loader (§4.A) and Validator (§4.B).

/// Errors raised while tokenizing a `.cub` descriptor into header directives
/// and a grid, before any structural validation runs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LevelParseError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("malformed directive on line {line}: {text:?}")]
    MalformedDirective { line: usize, text: String },

    #[error("directive `{0}` appears more than once")]
    DuplicateDirective(String),

    #[error("unknown directive `{0}` on line {1}")]
    UnknownDirective(String, usize),

    #[error("malformed RGB triple on line {line}: {text:?}")]
    MalformedRGB { line: usize, text: String },

    #[error("content found after the grid section on line {0}")]
    UnexpectedContentAfterGrid(usize),
}

impl From<std::io::Error> for LevelParseError {
    fn from(e: std::io::Error) -> Self {
        LevelParseError::Io(e.to_string())
    }
}

/// Errors raised while validating a tokenized descriptor (§4.B).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LevelValidationError {
    #[error("missing required directive `{0}`")]
    MissingDirective(&'static str),

    #[error("invalid character {0:?} in grid at ({1}, {2})")]
    InvalidCharInGrid(char, usize, usize),

    #[error("grid contains no player spawn")]
    NoSpawn,

    #[error("grid contains more than one player spawn")]
    MultipleSpawns,

    #[error("grid is not enclosed: open cell at ({0}, {1}) leaks to the outside")]
    GridNotEnclosed(usize, usize),
}
