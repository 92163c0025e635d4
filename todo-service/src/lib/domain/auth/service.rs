use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Authentication service: credential checks, token issuance and bearer
/// token resolution against the user store.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// # Arguments
    /// * `repository` - User lookup used to resolve token subjects
    /// * `token_service` - Configured token issuer/validator
    pub fn new(repository: Arc<UR>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            token_service,
            password_hasher: PasswordHasher::new(),
        }
    }

    fn issue(&self, user: &User) -> Result<AccessToken, AuthError> {
        self.token_service
            .issue(user.email.as_str())
            .map(AccessToken::bearer)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, AuthError> {
        let user = self
            .repository
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let Some(user) = user else {
            tracing::debug!("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        self.issue(&user)
    }

    async fn authenticate(&self, token: &str) -> Result<User, AuthError> {
        let subject = self.token_service.validate(token).map_err(|e| {
            tracing::warn!(reason = %e, "Bearer token rejected");
            AuthError::NotAuthorized
        })?;

        match self.repository.find_by_email(&subject).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                tracing::warn!("Bearer token subject has no account");
                Err(AuthError::NotAuthorized)
            }
            Err(e) => Err(AuthError::Internal(e.to_string())),
        }
    }

    async fn refresh_token(&self, user: &User) -> Result<AccessToken, AuthError> {
        self.issue(user)
    }
}
