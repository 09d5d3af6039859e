//! Shared error types for the drill.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors: bank parsing, sampling, console and file I/O.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DrillError {
    #[error("malformed question block starting at line {line}: expected 6 lines, found {found}")]
    MalformedBank { line: usize, found: usize },
    #[error("question block starting at line {line} has no closing [P] marker")]
    UnterminatedBlock { line: usize },
    #[error("question {id} has {found} options marked correct, expected exactly 1")]
    CorrectOptionCount { id: String, found: usize },
    #[error("question bank holds {available} questions, {requested} requested")]
    InsufficientBank { available: usize, requested: usize },
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("console: {0}")]
    Console(#[from] std::io::Error),
}

impl DrillError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DrillError::Io { path: path.into(), source }
    }
}

/// A keystroke that is not one of `a`..`d`. Recoverable: the session loop
/// re-prompts on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid answer input {0:?}")]
pub struct InvalidAnswerInput(pub String);
