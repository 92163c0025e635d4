use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::guard;
use crate::domain::page::Page;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    /// Fails when `username` or `email` already belong to someone other than `owner`.
    async fn ensure_unique(
        &self,
        username: &Username,
        email: &EmailAddress,
        owner: Option<&UserId>,
    ) -> Result<(), UserError> {
        let held_by_other = |user: &User| owner.map_or(true, |id| user.id != *id);

        if let Some(existing) = self.repository.find_by_username(username).await? {
            if held_by_other(&existing) {
                return Err(UserError::UsernameAlreadyExists(username.to_string()));
            }
        }

        if let Some(existing) = self.repository.find_by_email(email.as_str()).await? {
            if held_by_other(&existing) {
                return Err(UserError::EmailAlreadyExists(email.to_string()));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        self.ensure_unique(&command.username, &command.email, None)
            .await?;

        let password_hash = self.password_hasher.hash(command.password.expose())?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self, page: Page) -> Result<Vec<User>, UserError> {
        self.repository.list(page).await
    }

    async fn update_user(
        &self,
        current_user: &User,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        if !guard::authorize(current_user, id) {
            tracing::warn!(
                user_id = %current_user.id,
                target_id = %id,
                "Refused update of another user's account"
            );
            return Err(UserError::Forbidden);
        }

        self.ensure_unique(&command.username, &command.email, Some(id))
            .await?;

        let user = User {
            id: current_user.id,
            username: command.username,
            email: command.email,
            password_hash: self.password_hasher.hash(command.password.expose())?,
            created_at: current_user.created_at,
        };

        let updated_user = self.repository.update(user).await?;
        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, current_user: &User, id: &UserId) -> Result<(), UserError> {
        if !guard::authorize(current_user, id) {
            tracing::warn!(
                user_id = %current_user.id,
                target_id = %id,
                "Refused deletion of another user's account"
            );
            return Err(UserError::Forbidden);
        }

        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
