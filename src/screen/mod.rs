mod login;
mod signup;

pub use login::LoginScreen;
pub use signup::SignupScreen;
