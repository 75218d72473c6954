use crate::validation::{self, LoginErrors};

/// Login screen state.
///
/// Errors are replaced wholesale on each submit and stay on screen through
/// edits until the next submit.
#[derive(Debug)]
pub struct LoginScreen {
    email: String,
    password: String,
    hide_password: bool,
    errors: LoginErrors,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            hide_password: true,
            errors: LoginErrors::default(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_hidden(&self) -> bool {
        self.hide_password
    }

    pub fn errors(&self) -> &LoginErrors {
        &self.errors
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.hide_password = !self.hide_password;
    }

    /// Validates the current field values and, if they pass, hands off to the
    /// login stub. Returns whether the submit went through. The screen stays
    /// interactive either way.
    pub fn submit(&mut self) -> bool {
        self.errors = validation::validate_login(&self.email, &self.password);

        if !self.errors.is_valid() {
            return false;
        }

        log::info!("logging in as {}", self.email.trim());

        true
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_errors() {
        let screen = LoginScreen::new();

        assert!(screen.errors().is_valid());
        assert!(screen.password_hidden());
    }

    #[test]
    fn failed_submit_surfaces_messages() {
        let mut screen = LoginScreen::new();

        assert!(!screen.submit());
        assert_eq!(screen.errors().email, "Email is required");
        assert_eq!(screen.errors().password, "Password is required");
    }

    #[test]
    fn edits_do_not_clear_errors_until_resubmit() {
        let mut screen = LoginScreen::new();
        screen.submit();

        screen.set_email("user@example.com");
        assert_eq!(screen.errors().email, "Email is required");

        screen.set_password("secret1");
        assert!(screen.submit());
        assert!(screen.errors().is_valid());
    }

    #[test]
    fn successful_submit_keeps_field_values() {
        let mut screen = LoginScreen::new();
        screen.set_email("user@example.com");
        screen.set_password("secret1");

        assert!(screen.submit());
        assert_eq!(screen.email(), "user@example.com");
        assert_eq!(screen.password(), "secret1");
    }

    #[test]
    fn visibility_toggle_flips() {
        let mut screen = LoginScreen::new();

        screen.toggle_password_visibility();
        assert!(!screen.password_hidden());

        screen.toggle_password_visibility();
        assert!(screen.password_hidden());
    }
}
