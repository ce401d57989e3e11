use super::{
    admin_users::page_query,
    client::ApiClient,
    types::{ApiError, FailureText, UserLogListResponse},
};

impl ApiClient {
    pub async fn list_user_logs(
        &self,
        cursor: Option<&str>,
    ) -> Result<UserLogListResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let reply = self
            .send(
                self.http_client()
                    .get(format!("{}/admin/userlogs", base_url))
                    .headers(headers)
                    .query(&page_query(cursor)),
            )
            .await?;
        reply.json(FailureText::BodyOr("Failed to load logs"))
    }
}
