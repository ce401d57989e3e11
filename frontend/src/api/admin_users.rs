use super::{
    client::ApiClient,
    types::{ApiError, DeleteUserRequest, FailureText, UpdateUserRequest, UserListResponse},
};
use crate::config::PAGE_SIZE;

impl ApiClient {
    pub async fn list_users(&self, cursor: Option<&str>) -> Result<UserListResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let reply = self
            .send(
                self.http_client()
                    .get(format!("{}/admin/users", base_url))
                    .headers(headers)
                    .query(&page_query(cursor)),
            )
            .await?;
        reply.json(FailureText::BodyOr("Failed to load users"))
    }

    pub async fn update_user(&self, request: &UpdateUserRequest) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let reply = self
            .send(
                self.http_client()
                    .put(format!("{}/admin/users", base_url))
                    .headers(headers)
                    .json(request),
            )
            .await?;
        reply.empty(FailureText::BodyOr("Update failed"))
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let reply = self
            .send(
                self.http_client()
                    .delete(format!("{}/admin/users", base_url))
                    .headers(headers)
                    .json(&DeleteUserRequest { id: id.to_string() }),
            )
            .await?;
        reply.empty(FailureText::BodyOr("Delete failed"))
    }
}

/// `cursor` is omitted entirely for the first page.
pub(crate) fn page_query(cursor: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(2);
    if let Some(cursor) = cursor.filter(|c| !c.is_empty()) {
        params.push(("cursor", cursor.to_string()));
    }
    params.push(("limit", PAGE_SIZE.to_string()));
    params
}
