use reqwest::{header::HeaderMap, Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, FailureText},
    config,
    state::session::SessionStore,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: SessionStore::browser(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session: SessionStore::browser(),
        }
    }

    pub fn with_session_store(mut self, session: SessionStore) -> Self {
        self.session = session;
        self
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = self
            .session
            .load()
            .map(|session| session.token)
            .ok_or_else(ApiError::unauthenticated)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unknown("Invalid token format"))?,
        );
        Ok(headers)
    }

    /// Sends the request and buffers the whole body. Status handling is left
    /// to the caller through [`HttpReply`].
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<HttpReply, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url().path());

        if let Some(reply) = mock_reply(&request) {
            return reply;
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Ok(HttpReply { status, body })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(self, on_failure: FailureText) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(self.failure(on_failure));
        }
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    /// Success with the body ignored.
    pub fn empty(self, on_failure: FailureText) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.failure(on_failure))
        }
    }

    fn failure(self, on_failure: FailureText) -> ApiError {
        let error = ApiError::from_failure(self.status, &self.body, on_failure);
        log::warn!("request failed with status {}: {}", self.status, error.error);
        error
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mock_reply(_request: &reqwest::Request) -> Option<Result<HttpReply, ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mock_reply(request: &reqwest::Request) -> Option<Result<HttpReply, ApiError>> {
    let host = request.url().host_str()?;
    let responder = mock_registry()
        .lock()
        .ok()
        .and_then(|registry| registry.get(host).cloned())?;
    Some(
        responder
            .respond(request)
            .map(|response| HttpReply {
                status: response.status,
                body: response.body,
            }),
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_transport::mock_registry;
