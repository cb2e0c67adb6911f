use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use lazy_static::lazy_static;
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use regex::Regex;
use tracing::error;

use super::gateway::AuthError;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim and lower-case `email`, rejecting anything that doesn't look like one.
pub fn normalize_email(email: &str) -> Result<String, AuthError> {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    let email = email.trim().to_lowercase();
    if EMAIL_RE.is_match(&email) {
        Ok(email)
    } else {
        Err(AuthError::InvalidEmail)
    }
}

pub fn check_password_strength(plain: &str) -> Result<(), AuthError> {
    if plain.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword(MIN_PASSWORD_LEN));
    }
    Ok(())
}

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

/// Random URL-safe token for confirmation links.
pub fn confirmation_token() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(40)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "Secur3P@ssw0rd!";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(verify_password(password, &hash).expect("verify should succeed"));
        assert!(!verify_password("wrong-password", &hash).expect("verify should not error"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        assert!(verify_password("anything", "not-a-valid-hash").is_err());
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  Dev@Example.COM ").unwrap(), "dev@example.com");
        assert!(matches!(normalize_email("nope"), Err(AuthError::InvalidEmail)));
        assert!(matches!(normalize_email("a b@c.io"), Err(AuthError::InvalidEmail)));
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert!(matches!(
            check_password_strength("1234567"),
            Err(AuthError::WeakPassword(MIN_PASSWORD_LEN))
        ));
        assert!(check_password_strength("12345678").is_ok());
    }

    #[test]
    fn confirmation_tokens_are_distinct() {
        let a = confirmation_token();
        let b = confirmation_token();
        assert_eq!(a.len(), 40);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
