use crate::api::{Credentials, SignUpResponse};

pub const MISSING_CREDENTIALS: &str = "Enter email & password";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
}

impl LoginFormState {
    /// Both fields must be filled in before any request is made.
    pub fn to_credentials(&self) -> Result<Credentials, String> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(MISSING_CREDENTIALS.into());
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

pub fn sign_up_message(response: &SignUpResponse) -> String {
    format!("Account created! User ID: {}", response.user_id)
}
