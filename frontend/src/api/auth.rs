use super::{
    client::ApiClient,
    types::{ApiError, Credentials, FailureText, SignInResponse, SignUpResponse},
};

impl ApiClient {
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let reply = self
            .send(
                self.http_client()
                    .post(format!("{}/users/signup", base_url))
                    .json(credentials),
            )
            .await?;
        reply.json(FailureText::Status("Signup failed"))
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let reply = self
            .send(
                self.http_client()
                    .post(format!("{}/users/signin", base_url))
                    .json(credentials),
            )
            .await?;
        reply.json(FailureText::Status("Signin failed"))
    }
}
