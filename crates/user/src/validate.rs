use std::sync::LazyLock;

use regex::Regex;
use userhub_shared::Error;

pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Syntactic email check only, not a deliverability check.
pub fn validate_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// Check a candidate password against the minimum-strength policy.
///
/// Rules are checked in a fixed order (length, uppercase, digit) and only
/// the first failing rule is reported.
pub fn validate_password(candidate: &str) -> userhub_shared::Result<()> {
    if candidate.len() < 8 {
        return Err(Error::InvalidInput(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    if !candidate.chars().any(char::is_uppercase) {
        return Err(Error::InvalidInput(
            "Password must contain at least one uppercase letter".to_string(),
        ));
    }

    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidInput(
            "Password must contain at least one digit".to_string(),
        ));
    }

    Ok(())
}
