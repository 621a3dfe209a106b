use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;

/// Fatal problems with the word list or puzzle selection.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read word list '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed word list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid entry {word:?} in '{list}': words must be {expected} lowercase ASCII letters")]
    InvalidWord {
        list: &'static str,
        word: String,
        expected: usize,
    },
    #[error("word list has no answers")]
    NoAnswers,
    #[error("no puzzle for {date}: index {index} is outside the {available} available answers")]
    PuzzleOutOfRange {
        date: NaiveDate,
        index: i64,
        available: usize,
    },
}

/// A rejected guess. Never consumes an attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("guess has {actual} letters, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
    #[error("{word:?} is not in the word list")]
    NotInWordList { word: String },
}
