use std::path::PathBuf;

/// Errors raised when a move cannot be applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    OutOfRange { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors raised when parsing a textual board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("board has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },

    #[error("piece at row {row}, column {col} is floating above an empty cell")]
    Floating { row: usize, col: usize },

    #[error("piece counts {one} (X) and {two} (O) cannot arise from alternating play")]
    UnbalancedCounts { one: usize, two: usize },
}

/// Errors returned by the search engine and the agents wrapping it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal move: the game is already over")]
    NoLegalMove,

    #[error("search needs a positive depth limit or time limit")]
    UnboundedSearch,

    #[error("search generated an illegal move: {0}")]
    IllegalMove(#[from] IllegalMoveError),
}

/// Errors that can occur while playing games between agents.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("{agent} selected illegal move {column} (legal: {legal:?})")]
    IllegalMove {
        agent: String,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("{agent} failed to produce a move: {source}")]
    Agent {
        agent: String,
        source: SearchError,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
