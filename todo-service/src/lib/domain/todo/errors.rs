use thiserror::Error;

/// Error for TodoId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for TodoTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoTitleError {
    #[error("Todo title is empty")]
    Empty,

    #[error("Todo title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for TodoState parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoStateError {
    #[error("Unknown todo state '{0}' (expected draft, todo, doing, done or trash)")]
    Unknown(String),
}

/// Top-level error type for all todo-related operations
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    #[error("Invalid todo ID: {0}")]
    InvalidTodoId(#[from] TodoIdError),

    #[error("Invalid todo title: {0}")]
    InvalidTitle(#[from] TodoTitleError),

    #[error("Invalid todo state: {0}")]
    InvalidState(#[from] TodoStateError),

    #[error("Task not found.")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
