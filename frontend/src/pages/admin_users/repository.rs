use crate::api::{ApiClient, ApiError, UpdateUserRequest, UserListResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminUsersRepository {
    client: Rc<ApiClient>,
}

impl Default for AdminUsersRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminUsersRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_users(&self, cursor: Option<String>) -> Result<UserListResponse, ApiError> {
        self.client.list_users(cursor.as_deref()).await
    }

    pub async fn update_user(&self, request: &UpdateUserRequest) -> Result<(), ApiError> {
        self.client.update_user(request).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_user(id).await
    }
}
