use crate::validation::{self, SignupErrors};

/// Signup screen state.
///
/// Unlike the login screen, editing a field eagerly clears that field's
/// message; the others stay until the next submit.
#[derive(Debug)]
pub struct SignupScreen {
    full_name: String,
    email: String,
    password: String,
    confirm_password: String,
    hide_password: bool,
    hide_confirm_password: bool,
    errors: SignupErrors,
    notice: Option<String>,
}

impl SignupScreen {
    pub fn new() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            hide_password: true,
            hide_confirm_password: true,
            errors: SignupErrors::default(),
            notice: None,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn password_hidden(&self) -> bool {
        self.hide_password
    }

    pub fn confirm_password_hidden(&self) -> bool {
        self.hide_confirm_password
    }

    pub fn errors(&self) -> &SignupErrors {
        &self.errors
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
        self.errors.full_name.clear();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.errors.email.clear();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.errors.password.clear();
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
        self.errors.confirm_password.clear();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.hide_password = !self.hide_password;
    }

    pub fn toggle_confirm_password_visibility(&mut self) {
        self.hide_confirm_password = !self.hide_confirm_password;
    }

    /// Validates the current field values and, if they pass, surfaces the
    /// confirmation notice and hands off to the account-creation stub.
    /// Returns whether the submit went through.
    pub fn submit(&mut self) -> bool {
        self.notice = None;
        self.errors = validation::validate_signup(
            &self.full_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        );

        if !self.errors.is_valid() {
            return false;
        }

        self.notice = Some("Account created successfully!".to_string());

        log::info!("creating account for {}", self.email.trim());

        true
    }
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self::new()
    }
}
