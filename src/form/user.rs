use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct SignupFormData {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
