use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::Algorithm;

use crate::jwt::Claims;
use crate::jwt::JwtHandler;
use crate::jwt::TokenError;

/// Issues and validates time-limited bearer tokens carrying a subject.
///
/// Verification is stateless: a token is valid when its signature checks
/// out, the current time is before its `exp` claim and it names a subject.
pub struct TokenService {
    jwt_handler: JwtHandler,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Arguments
    /// * `jwt_handler` - Signing handler (secret and algorithm)
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(jwt_handler: JwtHandler, ttl: Duration) -> Self {
        Self { jwt_handler, ttl }
    }

    /// Create a token service from raw settings.
    ///
    /// # Arguments
    /// * `secret` - Shared signing secret
    /// * `algorithm` - Algorithm name, e.g. `"HS256"`
    /// * `ttl_minutes` - Token lifetime in minutes
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Algorithm is unknown or not HMAC based
    pub fn from_settings(
        secret: &[u8],
        algorithm: &str,
        ttl_minutes: i64,
    ) -> Result<Self, TokenError> {
        Ok(Self::new(
            JwtHandler::from_name(secret, algorithm)?,
            Duration::minutes(ttl_minutes),
        ))
    }

    /// Lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Signing algorithm in use.
    pub fn algorithm(&self) -> Algorithm {
        self.jwt_handler.algorithm()
    }

    /// Issue a token for `subject`, valid from now until now + TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, now, self.ttl);
        self.jwt_handler.encode(&claims)
    }

    /// Validate a token and return its subject claim unmodified.
    ///
    /// # Errors
    /// * `Malformed` - Bad signature, undecodable payload, or no `exp` claim
    /// * `Expired` - Current time is at or past `exp`
    /// * `MissingSubject` - `sub` claim absent or empty
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token as if the current time were `now`.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.exp.is_none() {
            return Err(TokenError::Malformed("missing exp claim".to_string()));
        }
        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        claims
            .subject()
            .map(str::to_string)
            .ok_or(TokenError::MissingSubject)
    }
}
