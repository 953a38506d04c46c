use crate::{ApiClient, ClientError, ClientResult};

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Response of `POST /api/accounts/login/`.
///
/// The endpoint answers 200 for both outcomes; `success` is the signal.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `GET /api/accounts/powerbi-link/?email=` - the extended
/// profile used to complete an identity after login. Absent fields arrive
/// as empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub form_link1: String,
    #[serde(default)]
    pub form_link2: String,
    #[serde(default)]
    pub form_link3: String,
    #[serde(default)]
    pub powerbi_link: String,
}

/// Authentication endpoints, behind a trait so the session store is testable
/// against an in-memory fake.
#[async_trait]
pub trait AuthApi {
    async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse>;

    /// Resolve the extended profile for a just-authenticated email.
    async fn session(&self, email: &str) -> ClientResult<SessionResponse>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let response = self
            .request(Method::POST, "/api/accounts/login/")
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        Ok(response.json().await?)
    }

    async fn session(&self, email: &str) -> ClientResult<SessionResponse> {
        let response = self
            .request(Method::GET, "/api/accounts/powerbi-link/")
            .query(&[("email", email)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::session_resolution_failed(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
