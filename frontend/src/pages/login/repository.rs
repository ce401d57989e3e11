use crate::api::{ApiClient, ApiError, Credentials, SignInResponse, SignUpResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError> {
        self.client.sign_in(credentials).await
    }

    pub async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpResponse, ApiError> {
        self.client.sign_up(credentials).await
    }
}
