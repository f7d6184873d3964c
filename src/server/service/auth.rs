//! Credential hashing and session token issuance.
//!
//! This module provides the `AuthService` for producing password digests and
//! session tokens. Both use the same keyed-hash primitive: an HMAC whose key
//! is the per-user salt joined with the hashed value by a `/` separator and
//! whose message is the process-wide secret key. The algorithm (SHA-256 or
//! SHA-512) is selected by name from configuration.

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::{Sha256, Sha512};

use crate::server::{
    config::{Config, HashAlgorithm},
    error::AppError,
};

/// Length of generated salts in characters.
const SALT_LENGTH: usize = 64;

/// Keyed-hash service for password digests and session tokens.
///
/// Holds the configured secret key and hash algorithm. Cloned freely into
/// request handlers through the application state.
#[derive(Clone)]
pub struct AuthService {
    secret_key: String,
    algorithm: HashAlgorithm,
}

impl AuthService {
    /// Creates a new AuthService from the application configuration.
    ///
    /// # Arguments
    /// - `config` - Configuration carrying the secret key and algorithm name
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(config: &Config) -> Self {
        Self {
            secret_key: config.secret_key.clone(),
            algorithm: config.hashing_algorithm,
        }
    }

    /// Generates a random high-entropy salt.
    ///
    /// Creates a 64-character string of uppercase letters, lowercase letters,
    /// and digits using the system's random number generator. A fresh salt is
    /// drawn per user at registration and per session token at login.
    ///
    /// # Returns
    /// - `String` - A 64-character random alphanumeric string
    pub fn random_salt() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..SALT_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Produces a keyed-hash digest for the given salt and value.
    ///
    /// The HMAC key is `salt + "/" + value`; the message is the configured
    /// secret key; the output is the hex-encoded MAC. Used both for password
    /// digests (value = plaintext password) and session tokens (value =
    /// stringified user id).
    ///
    /// # Arguments
    /// - `salt` - Per-user or per-token random salt
    /// - `value` - The value being digested
    ///
    /// # Returns
    /// - `Ok(String)` - Hex-encoded digest
    /// - `Err(AppError::InternalError)` - The MAC could not be keyed
    pub fn digest(&self, salt: &str, value: &str) -> Result<String, AppError> {
        let key = format!("{}/{}", salt, value);

        let digest = match self.algorithm {
            HashAlgorithm::Sha256 => {
                let mut mac = Hmac::<Sha256>::new_from_slice(key.as_bytes())
                    .map_err(|e| AppError::InternalError(format!("Failed to key HMAC: {}", e)))?;
                mac.update(self.secret_key.as_bytes());
                hex::encode(mac.finalize().into_bytes())
            }
            HashAlgorithm::Sha512 => {
                let mut mac = Hmac::<Sha512>::new_from_slice(key.as_bytes())
                    .map_err(|e| AppError::InternalError(format!("Failed to key HMAC: {}", e)))?;
                mac.update(self.secret_key.as_bytes());
                hex::encode(mac.finalize().into_bytes())
            }
        };

        Ok(digest)
    }

    /// Issues a fresh session token for a user.
    ///
    /// Digests the user's numeric id with a newly drawn salt, so every login
    /// yields a different token. The caller persists the token to the user's
    /// `session_token` column, overwriting any prior value and invalidating
    /// previous sessions.
    ///
    /// # Arguments
    /// - `user_id` - Numeric id of the logging-in user
    ///
    /// # Returns
    /// - `Ok(String)` - Hex-encoded session token
    /// - `Err(AppError::InternalError)` - The MAC could not be keyed
    pub fn session_token(&self, user_id: i32) -> Result<String, AppError> {
        self.digest(&Self::random_salt(), &user_id.to_string())
    }
}
