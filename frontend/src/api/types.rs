use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLog {
    pub user_id: String,
    pub event_type: String,
    #[serde(default)]
    pub details: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct UserListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<User>,
    #[serde(default, deserialize_with = "cursor")]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct UserLogListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_logs: Vec<UserLog>,
    #[serde(default, deserialize_with = "cursor")]
    pub next_cursor: Option<String>,
}

/// The two user columns that can be edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Email,
    Name,
}

impl UserField {
    pub fn label(&self) -> &'static str {
        match self {
            UserField::Email => "email",
            UserField::Name => "name",
        }
    }
}

/// Body of `PUT /admin/users`. Only the changed field is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUserRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UpdateUserRequest {
    pub fn single_field(id: impl Into<String>, field: UserField, value: impl Into<String>) -> Self {
        let value = value.into();
        let (email, name) = match field {
            UserField::Email => (Some(value), None),
            UserField::Name => (None, Some(value)),
        };
        Self {
            id: id.into(),
            email,
            name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteUserRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    pub status: Option<u16>,
}

/// How a non-2xx response becomes the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureText {
    /// `"<label> (<status>)"`, the response body is not shown.
    Status(&'static str),
    /// The raw response body verbatim, or the fallback when the body is empty.
    BodyOr(&'static str),
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            status: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            status: None,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            error: "No token".to_string(),
            code: "UNAUTHENTICATED".to_string(),
            status: None,
        }
    }

    pub fn from_failure(status: u16, body: &str, text: FailureText) -> Self {
        let error = match text {
            FailureText::Status(label) => format!("{} ({})", label, status),
            FailureText::BodyOr(fallback) if body.is_empty() => fallback.to_string(),
            FailureText::BodyOr(_) => body.to_string(),
        };
        Self {
            error,
            code: "HTTP_ERROR".to_string(),
            status: Some(status),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// The backend sends "" once the listing is exhausted.
fn cursor<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|value| !value.is_empty()))
}
