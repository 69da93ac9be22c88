use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use super::AuthError;

/// How passwords are written to and checked against the `users` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMode {
    /// Argon2id PHC string, `$argon2id$v=19$...`
    Hashed,
    /// Stored and compared as given
    LegacyPlaintext,
}

impl PasswordMode {
    pub fn from_legacy_flag(legacy_compat: bool) -> Self {
        if legacy_compat {
            PasswordMode::LegacyPlaintext
        } else {
            PasswordMode::Hashed
        }
    }

    /// Whether user payloads carry the stored password back to the client
    pub fn echoes_password(self) -> bool {
        self == PasswordMode::LegacyPlaintext
    }

    /// Produce the value persisted for `raw`
    pub fn store(self, raw: &str) -> Result<String, AuthError> {
        match self {
            PasswordMode::LegacyPlaintext => Ok(raw.to_string()),
            PasswordMode::Hashed => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(raw.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| AuthError::PasswordHashing(e.to_string()))
            }
        }
    }

    /// Check a login attempt against a stored value.
    ///
    /// PHC hashes verify in either mode. A plaintext value only matches in
    /// legacy mode, so rows written before hashing was enabled stop working
    /// once it is.
    pub fn verify(self, stored: &str, raw: &str) -> bool {
        match PasswordHash::new(stored) {
            Ok(parsed) => Argon2::default()
                .verify_password(raw.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => self == PasswordMode::LegacyPlaintext && stored == raw,
        }
    }
}
