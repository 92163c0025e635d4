use async_trait::async_trait;

use crate::domain::page::Page;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// List users ordered by registration time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self, page: Page) -> Result<Vec<User>, UserError>;

    /// Replace the profile of `id` on behalf of `current_user`.
    ///
    /// # Arguments
    /// * `current_user` - Authenticated caller
    /// * `id` - User ID to update
    /// * `command` - New username, email, and password
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `Forbidden` - Caller does not own the account
    /// * `UsernameAlreadyExists` - New username belongs to another user
    /// * `EmailAlreadyExists` - New email belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn update_user(
        &self,
        current_user: &User,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError>;

    /// Delete the account `id` on behalf of `current_user`, with its todos.
    ///
    /// # Errors
    /// * `Forbidden` - Caller does not own the account
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, current_user: &User, id: &UserId) -> Result<(), UserError>;
}

/// User storage. Lookups return `Ok(None)` for a missing row; only
/// storage faults are errors.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a new row. The store's unique keys on username and email are
    /// the last word on conflicts, surfacing as `UsernameAlreadyExists` or
    /// `EmailAlreadyExists`.
    async fn create(&self, user: User) -> Result<User, UserError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// `email` is a plain string because token subjects arrive unvalidated.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Ordered by `created_at`, then `id`.
    async fn list(&self, page: Page) -> Result<Vec<User>, UserError>;

    /// Overwrite username, email and password hash of an existing row.
    ///
    /// # Errors
    /// * `NotFound` - No row with this id
    /// * `UsernameAlreadyExists` / `EmailAlreadyExists` - Unique key hit
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove the row and, through the foreign key, every todo it owns.
    ///
    /// # Errors
    /// * `NotFound` - No row with this id
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
