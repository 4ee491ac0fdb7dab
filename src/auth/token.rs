//! HS256 token issuance and verification.

use crate::config::AuthConfig;
use crate::identity::domain::{Role, User};
use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Token errors.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signing secret is empty.
    #[error("token secret is not configured")]
    MissingSecret,
    /// The token's expiry lies in the past.
    #[error("token expired")]
    Expired,
    /// Encoding or signature validation failed.
    #[error("token rejected: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the subject.
    pub sub: String,
    /// Role of the subject at issue time.
    pub role: Role,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Unique token identifier.
    pub jti: Uuid,
}

/// Encoded token plus its claims.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact JWS encoding.
    pub access_token: String,
    /// Claims that were signed.
    pub claims: Claims,
}

/// Issues and verifies access tokens with a shared HMAC secret.
///
/// Issue and expiry times are read from the service's clock.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Creates a service from a secret and a token lifetime, reading the
    /// system clock.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::MissingSecret`] for an empty secret.
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }
        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
            clock: Arc::new(DefaultClock),
        })
    }

    /// Replaces the clock used to stamp and check tokens.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Creates a service from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::MissingSecret`] for an empty secret.
    pub fn from_config(config: &AuthConfig) -> Result<Self, TokenError> {
        Self::new(
            &config.jwt_secret,
            Duration::minutes(i64::from(config.token_ttl_minutes)),
        )
    }

    /// Issues a token for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Jwt`] when encoding fails.
    pub fn issue(&self, user: &User) -> Result<IssuedToken, TokenError> {
        let now = self.clock.utc();
        let claims = Claims {
            sub: user.username().as_str().to_owned(),
            role: user.role(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            jti: Uuid::new_v4(),
        };
        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        debug!(user = %user.id(), jti = %claims.jti, "token issued");
        Ok(IssuedToken {
            access_token,
            claims,
        })
    }

    /// Verifies signature and expiry and returns the claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Jwt`] for a malformed or forged token and
    /// [`TokenError::Expired`] once the clock has passed its expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);
        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        if data.claims.exp <= self.clock.utc().timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }
}
