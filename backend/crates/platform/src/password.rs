//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - NIST SP 800-63B policy when a new password is chosen
//! - Zeroization of clear text on drop
//! - Constant-time verification (inside `argon2` / `bcrypt`)
//!
//! New hashes are Argon2id PHC strings
//! (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`). Existing bcrypt
//! hashes (`$2b$12$...`) are verified but never produced.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants (NIST SP 800-63B compliant)
// ============================================================================

/// Minimum password length (NIST: SHALL be at least 8)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (NIST: SHOULD permit at least 64)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,

    #[error("Unsupported password hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Not `Clone`, and `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new password that is about to be hashed and stored
    ///
    /// Validates against NIST SP 800-63B requirements after NFKC
    /// normalization:
    /// - 8 to 128 code points
    /// - No control characters
    /// - Not empty/whitespace only
    /// - Not a well-known weak pattern
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::for_verification(raw);
        let normalized = password.0.as_str();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // NIST: count Unicode code points, not bytes
        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if is_common_pattern(normalized) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(password)
    }

    /// Wrap a password presented at login
    ///
    /// Only NFKC normalization is applied so the bytes match what was hashed;
    /// a guess that would fail the policy simply fails verification.
    pub fn for_verification(raw: String) -> Self {
        let mut raw = raw;
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id with a fresh random salt
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        // 128-bit salt
        let salt = SaltString::generate(&mut OsRng);

        // OWASP recommended Argon2id parameters: m=19456 (19 MiB), t=2, p=1
        let hash = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
            algorithm: HashAlgorithm::Argon2,
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Password hash family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// `$argon2id$` / `$argon2i$` / `$argon2d$` PHC strings
    Argon2,
    /// `$2a$` / `$2b$` / `$2y$` modular crypt strings (passlib, htpasswd)
    Bcrypt,
}

const BCRYPT_PREFIXES: &[&str] = &["$2a$", "$2b$", "$2y$"];

/// Stored password hash
///
/// New hashes are always Argon2id. Bcrypt hashes are accepted so that
/// existing deployments keep working.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
    algorithm: HashAlgorithm,
}

impl HashedPassword {
    /// Parse a configured hash string
    ///
    /// Accepts Argon2 PHC strings and bcrypt `$2a$`/`$2b$`/`$2y$` strings;
    /// anything else could never verify.
    pub fn from_hash_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        if BCRYPT_PREFIXES.iter().any(|prefix| hash.starts_with(prefix)) {
            hash.parse::<bcrypt::HashParts>()
                .map_err(|_| PasswordHashError::InvalidHashFormat)?;

            return Ok(Self {
                hash,
                algorithm: HashAlgorithm::Bcrypt,
            });
        }

        let parsed = PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        let algorithm = parsed.algorithm;
        if algorithm != argon2::Algorithm::Argon2id.ident()
            && algorithm != argon2::Algorithm::Argon2i.ident()
            && algorithm != argon2::Algorithm::Argon2d.ident()
        {
            return Err(PasswordHashError::UnsupportedAlgorithm(
                algorithm.to_string(),
            ));
        }

        Ok(Self {
            hash,
            algorithm: HashAlgorithm::Argon2,
        })
    }

    /// Get the hash string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Verify a password against this hash
    ///
    /// Both `argon2` and `bcrypt` compare the derived key in constant time.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        match self.algorithm {
            HashAlgorithm::Argon2 => {
                let parsed_hash = match PasswordHash::new(&self.hash) {
                    Ok(h) => h,
                    Err(_) => return false,
                };

                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok()
            }
            HashAlgorithm::Bcrypt => {
                bcrypt::verify(password.as_bytes(), &self.hash).unwrap_or(false)
            }
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Check for common weak patterns
fn is_common_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();

    // e.g. "aaaaaaaa"
    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) {
            return true;
        }
    }

    if is_sequential_numbers(&lower) {
        return true;
    }

    const KEYBOARD_PATTERNS: &[&str] = &["qwerty", "asdfgh", "zxcvbn", "qazwsx", "1qaz2wsx"];

    if KEYBOARD_PATTERNS.iter().any(|pattern| lower.contains(pattern)) {
        return true;
    }

    const COMMON_PASSWORDS: &[&str] = &[
        "password",
        "password1",
        "password123",
        "abcdefgh",
        "letmein1",
        "welcome1",
        "admin123",
        "administrator",
        "iloveyou",
        "sunshine",
        "princess",
        "football",
        "baseball",
        "trustno1",
        "changeme",
        "change-me-in-production",
    ];

    COMMON_PASSWORDS.contains(&lower.as_str())
}

/// Check if string is made of ascending or descending digits (wrapping 9/0)
fn is_sequential_numbers(s: &str) -> bool {
    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 4 || digits.len() != s.chars().count() {
        return false;
    }

    let is_ascending = digits
        .windows(2)
        .all(|w| w[1] == w[0] + 1 || (w[0] == 9 && w[1] == 0));

    let is_descending = digits
        .windows(2)
        .all(|w| w[0] == w[1] + 1 || (w[0] == 0 && w[1] == 9));

    is_ascending || is_descending
}

// ============================================================================
// Tests
// ============================================================================
