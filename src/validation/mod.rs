use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
        .expect("email pattern should be valid")
});

/// Per-field messages from a login submit. An empty string means the field
/// passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: String,
    pub password: String,
}

impl LoginErrors {
    pub fn is_valid(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

/// Per-field messages from a signup submit. An empty string means the field
/// passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupErrors {
    pub fn is_valid(&self) -> bool {
        self.full_name.is_empty()
            && self.email.is_empty()
            && self.password.is_empty()
            && self.confirm_password.is_empty()
    }
}

/// Checks the login fields. Every field is always evaluated so all messages
/// surface together.
pub fn validate_login(email: &str, password: &str) -> LoginErrors {
    let mut errors = LoginErrors::default();

    if email.trim().is_empty() {
        errors.email = "Email is required".to_string();
    } else if !EMAIL_PATTERN.is_match(email.trim()) {
        errors.email = "Invalid email address".to_string();
    }

    if password.trim().is_empty() {
        errors.password = "Password is required".to_string();
    } else if password.chars().count() < 6 {
        errors.password = "Password must be at least 6 characters".to_string();
    }

    errors
}

/// Checks the signup fields. The rules differ from login on purpose: the
/// messages carry a trailing period, and the password emptiness check does
/// not trim.
pub fn validate_signup(
    full_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> SignupErrors {
    let mut errors = SignupErrors::default();

    if full_name.trim().is_empty() {
        errors.full_name = "Full name is required.".to_string();
    }

    if email.trim().is_empty() {
        errors.email = "Email is required.".to_string();
    } else if !EMAIL_PATTERN.is_match(email.trim()) {
        errors.email = "Email is invalid.".to_string();
    }

    if password.is_empty() {
        errors.password = "Password is required.".to_string();
    } else if password.chars().count() < 6 {
        errors.password = "Password must be at least 6 characters.".to_string();
    }

    if confirm_password.is_empty() {
        errors.confirm_password = "Please confirm your password.".to_string();
    } else if confirm_password != password {
        errors.confirm_password = "Passwords do not match.".to_string();
    }

    errors
}
