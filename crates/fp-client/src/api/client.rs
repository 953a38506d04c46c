use crate::{ClientError, ClientResult};

use reqwest::{Client as ReqwestClient, Method, Response};
use serde_json::Value;

/// HTTP client for the accounts backend.
///
/// The backend authenticates with an opaque session cookie set by the login
/// endpoint, so the underlying client carries a cookie store and every later
/// request rides on it (the browser's `credentials: "include"`).
pub struct ApiClient {
    pub base_url: String,
    http: ReqwestClient,
}

impl ApiClient {
    /// Create a client against `base_url` (e.g. "http://127.0.0.1:8000").
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = ReqwestClient::builder()
            .cookie_store(true)
            .build()
            .map_err(ClientError::from)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Build a request against a backend path.
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    /// Reject non-2xx responses, pulling the backend's message out of the
    /// error body when there is one.
    pub(crate) async fn check(&self, response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body
            .get("detail")
            .or_else(|| body.get("error"))
            .or_else(|| body.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();

        Err(ClientError::api(status.as_u16(), message))
    }
}
