mod client;

use crate::api::auth::{AuthApi, LoginResponse, SessionResponse};
use crate::{ClientError, ClientResult};

use async_trait::async_trait;

/// In-memory stand-in for the accounts backend's auth endpoints.
pub(crate) struct FakeAuth {
    pub accept: bool,
    pub reject_message: Option<String>,
    pub session_resolves: bool,
    pub is_superuser: bool,
    pub form_link1: String,
    pub powerbi_link: String,
}

impl Default for FakeAuth {
    fn default() -> Self {
        Self {
            accept: true,
            reject_message: None,
            session_resolves: true,
            is_superuser: false,
            form_link1: String::new(),
            powerbi_link: String::new(),
        }
    }
}

#[async_trait]
impl AuthApi for FakeAuth {
    async fn login(&self, email: &str, _password: &str) -> ClientResult<LoginResponse> {
        Ok(LoginResponse {
            success: self.accept,
            email: self.accept.then(|| email.to_string()),
            is_superuser: self.accept && self.is_superuser,
            error: self.reject_message.clone(),
        })
    }

    async fn session(&self, email: &str) -> ClientResult<SessionResponse> {
        if !self.session_resolves {
            return Err(ClientError::session_resolution_failed(404));
        }

        Ok(SessionResponse {
            success: true,
            id: 42,
            email: email.to_string(),
            username: "ana".to_string(),
            is_superuser: self.is_superuser,
            form_link1: self.form_link1.clone(),
            form_link2: String::new(),
            form_link3: String::new(),
            powerbi_link: self.powerbi_link.clone(),
        })
    }
}
