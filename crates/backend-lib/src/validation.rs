// ============================
// crates/backend-lib/src/validation.rs
// ============================
//! Request input validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;

const MAX_USERNAME_LENGTH: usize = 64;
const MAX_PASSWORD_LENGTH: usize = 128;

// Owner names double as file names in the data directory, so the charset
// stays restrictive.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Validate a username
pub fn validate_username(username: &str) -> Result<&str, AppError> {
    if username.is_empty() {
        return Err(AppError::InvalidInput(
            "Missing username or password".to_string(),
        ));
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Username cannot exceed {MAX_USERNAME_LENGTH} characters"
        )));
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(AppError::InvalidInput(
            "Username must contain only alphanumeric characters, hyphens, and underscores"
                .to_string(),
        ));
    }

    Ok(username)
}

/// Validate a password.
///
/// Length-capped and non-empty only; there is no complexity policy.
pub fn validate_password(password: &str) -> Result<&str, AppError> {
    if password.is_empty() {
        return Err(AppError::InvalidInput(
            "Missing username or password".to_string(),
        ));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Password cannot exceed {MAX_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("user-123_x").is_ok());

        assert!(matches!(
            validate_username(""),
            Err(AppError::InvalidInput(_))
        ));

        let long_name = "a".repeat(65);
        assert!(matches!(
            validate_username(&long_name),
            Err(AppError::InvalidInput(_))
        ));

        assert!(matches!(
            validate_username("../etc/passwd"),
            Err(AppError::InvalidInput(_))
        ));

        assert!(matches!(
            validate_username("alice smith"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret123").is_ok());
        // no complexity policy: short and single-class passwords pass
        assert!(validate_password("a").is_ok());

        assert!(matches!(
            validate_password(""),
            Err(AppError::InvalidInput(_))
        ));

        let long_password = "a".repeat(129);
        assert!(matches!(
            validate_password(&long_password),
            Err(AppError::InvalidInput(_))
        ));
    }
}
