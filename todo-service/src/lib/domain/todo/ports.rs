use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::user::models::UserId;

/// Port for todo domain service operations.
///
/// Every operation is scoped to `owner`: a todo belonging to someone else
/// behaves exactly like one that does not exist.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Create a todo owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_todo(&self, owner: &UserId, command: CreateTodoCommand)
        -> Result<Todo, TodoError>;

    /// List the owner's todos matching `filter`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_todos(&self, owner: &UserId, filter: TodoFilter) -> Result<Vec<Todo>, TodoError>;

    /// Partially update one of the owner's todos.
    ///
    /// # Errors
    /// * `NotFound` - No such todo for this owner
    /// * `DatabaseError` - Database operation failed
    async fn update_todo(
        &self,
        owner: &UserId,
        id: &TodoId,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoError>;

    /// Delete one of the owner's todos.
    ///
    /// # Errors
    /// * `NotFound` - No such todo for this owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_todo(&self, owner: &UserId, id: &TodoId) -> Result<(), TodoError>;
}

/// Persistence operations for todos.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Persist a new todo.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed (including unknown owner)
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// Retrieve a todo by owner and identifier.
    ///
    /// # Returns
    /// None if absent or owned by someone else
    async fn find(&self, owner: &UserId, id: &TodoId) -> Result<Option<Todo>, TodoError>;

    /// Retrieve the owner's todos matching `filter`, ordered by creation time.
    async fn list(&self, owner: &UserId, filter: &TodoFilter) -> Result<Vec<Todo>, TodoError>;

    /// Store new field values for `todo` (matched on owner and id).
    ///
    /// # Errors
    /// * `NotFound` - No row matched
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// Remove a todo by owner and identifier.
    ///
    /// # Errors
    /// * `NotFound` - No row matched
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, owner: &UserId, id: &TodoId) -> Result<(), TodoError>;
}
