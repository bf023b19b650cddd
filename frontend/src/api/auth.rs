use super::{
    client::{persist_session, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse, RegisterRequest, UserResponse},
};

impl ApiClient {
    /// Authenticates and persists the returned session. A rejected login
    /// leaves any previously stored session untouched.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_public(
                self.http_client()
                    .post(format!("{}/accounts/login", base_url))
                    .json(&request),
            )
            .await?;
        let login: LoginResponse = Self::expect_json(response).await?;
        persist_session(&login)?;
        Ok(login)
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_public(
                self.http_client()
                    .post(format!("{}/accounts/register", base_url))
                    .json(&request),
            )
            .await?;
        Self::expect_json(response).await
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let headers = Self::auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/accounts/me", base_url))
                    .headers(headers),
            )
            .await?;
        Self::expect_json(response).await
    }
}
