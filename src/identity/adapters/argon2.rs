//! Argon2id implementation of the credential hashing port.

use crate::identity::{
    domain::{Password, PasswordHash},
    ports::{CredentialError, CredentialHasher},
};
use argon2::password_hash::{
    PasswordHash as PhcString, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::Argon2;
use rand::rngs::OsRng;

/// Argon2id hasher with a fresh random salt per hash.
#[derive(Debug, Clone, Default)]
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
}

impl Argon2CredentialHasher {
    /// Creates a hasher using the library's recommended parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let encoded = self
            .argon2
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|err| CredentialError(err.to_string()))?;
        Ok(PasswordHash::from_encoded(encoded.to_string()))
    }

    fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        let Ok(parsed) = PhcString::new(hash.as_str()) else {
            return false;
        };
        self.argon2
            .verify_password(password.expose().as_bytes(), &parsed)
            .is_ok()
    }
}
