use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::page::Page;
use crate::domain::todo::errors::TodoIdError;
use crate::domain::todo::errors::TodoStateError;
use crate::domain::todo::errors::TodoTitleError;
use crate::domain::user::models::UserId;

/// Todo unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(pub Uuid);

impl TodoId {
    /// Generate a new random todo ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a todo ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TodoIdError> {
        Uuid::parse_str(s)
            .map(TodoId)
            .map_err(|e| TodoIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A task on a user's list. Always owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: TodoTitle,
    pub description: String,
    pub state: TodoState,
    pub created_at: DateTime<Utc>,
}

/// Todo title value object.
///
/// Ensures title is non-empty and within 255 character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `Empty` - Title is empty or whitespace
    /// * `TooLong` - Title exceeds 255 characters
    pub fn new(title: String) -> Result<Self, TodoTitleError> {
        let length = title.chars().count();
        if title.trim().is_empty() {
            Err(TodoTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(TodoTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lifecycle state of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoState {
    Draft,
    Todo,
    Doing,
    Done,
    Trash,
}

impl TodoState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoState::Draft => "draft",
            TodoState::Todo => "todo",
            TodoState::Doing => "doing",
            TodoState::Done => "done",
            TodoState::Trash => "trash",
        }
    }
}

impl FromStr for TodoState {
    type Err = TodoStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(TodoState::Draft),
            "todo" => Ok(TodoState::Todo),
            "doing" => Ok(TodoState::Doing),
            "done" => Ok(TodoState::Done),
            "trash" => Ok(TodoState::Trash),
            other => Err(TodoStateError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for TodoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to create a todo for the authenticated user.
#[derive(Debug)]
pub struct CreateTodoCommand {
    pub title: TodoTitle,
    pub description: String,
    pub state: TodoState,
}

/// Partial update; only provided fields change.
#[derive(Debug, Default)]
pub struct UpdateTodoCommand {
    pub title: Option<TodoTitle>,
    pub description: Option<String>,
    pub state: Option<TodoState>,
}

impl UpdateTodoCommand {
    /// Apply the provided fields to `todo`.
    pub fn apply(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(description) = self.description {
            todo.description = description;
        }
        if let Some(state) = self.state {
            todo.state = state;
        }
    }
}

/// Listing filter over one user's todos.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoFilter {
    /// Substring the title must contain
    pub title: Option<String>,
    /// Substring the description must contain
    pub description: Option<String>,
    /// Exact state
    pub state: Option<TodoState>,
    pub page: Page,
}

impl TodoFilter {
    pub const DEFAULT_LIMIT: u32 = 100;
}

impl Default for TodoFilter {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            state: None,
            page: Page::new(0, Self::DEFAULT_LIMIT),
        }
    }
}
