use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::user::models::User;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange an email and password for an access token.
    ///
    /// # Arguments
    /// * `email` - Account email (the token subject)
    /// * `password` - Plaintext password
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `Internal` - Lookup or token signing failed
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Resolve a bearer token into the user it was issued for.
    ///
    /// # Errors
    /// * `NotAuthorized` - Token malformed, expired, without subject, or subject unknown
    /// * `Internal` - Lookup failed
    async fn authenticate(&self, token: &str) -> Result<User, AuthError>;

    /// Issue a new token for an already authenticated user.
    ///
    /// # Errors
    /// * `Internal` - Token signing failed
    async fn refresh_token(&self, user: &User) -> Result<AccessToken, AuthError>;
}
