use askama::Template;

use crate::screen::{LoginScreen, SignupScreen};
use crate::validation::{LoginErrors, SignupErrors};

#[derive(Template, Default)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub password: String,
    pub errors: LoginErrors,
}

impl From<&LoginScreen> for LoginTemplate {
    fn from(screen: &LoginScreen) -> Self {
        Self {
            email: screen.email().to_string(),
            password: screen.password().to_string(),
            errors: screen.errors().clone(),
        }
    }
}

#[derive(Template, Default)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub errors: SignupErrors,
    pub notice: Option<String>,
}

impl From<&SignupScreen> for SignupTemplate {
    fn from(screen: &SignupScreen) -> Self {
        Self {
            full_name: screen.full_name().to_string(),
            email: screen.email().to_string(),
            password: screen.password().to_string(),
            confirm_password: screen.confirm_password().to_string(),
            errors: screen.errors().clone(),
            notice: screen.notice().map(str::to_string),
        }
    }
}
