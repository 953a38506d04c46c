use crate::{ApiClient, ClientResult};

use fp_core::{FORM_LINK_SLOTS, UserProfile, UserRecord};

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Partial update sent by the edit flow: the editable fields, whole.
#[derive(Debug, Clone, Serialize)]
pub struct UserPatch {
    pub username: String,
    pub email: String,
    pub profile: UserProfile,
}

/// The three form-link slots for one account, in slot order.
pub type FormLinks = [Option<String>; FORM_LINK_SLOTS];

/// User-management endpoints. Admin-gated server-side; the client enforces
/// the same gate redundantly before calling.
#[async_trait]
pub trait UsersApi {
    async fn list_users(&self) -> ClientResult<Vec<UserRecord>>;

    async fn get_user(&self, id: i64) -> ClientResult<UserRecord>;

    /// PATCH the editable fields; returns the backend's updated record.
    async fn update_user(&self, id: i64, patch: &UserPatch) -> ClientResult<UserRecord>;

    async fn delete_user(&self, id: i64) -> ClientResult<()>;

    async fn register(&self, email: &str, username: &str, password: &str) -> ClientResult<()>;

    /// The up-to-three form links assigned to an email.
    async fn user_links(&self, email: &str) -> ClientResult<FormLinks>;
}

#[async_trait]
impl UsersApi for ApiClient {
    async fn list_users(&self) -> ClientResult<Vec<UserRecord>> {
        let response = self
            .request(Method::GET, "/api/accounts/users/")
            .send()
            .await?;
        let response = self.check(response).await?;

        Ok(response.json().await?)
    }

    async fn get_user(&self, id: i64) -> ClientResult<UserRecord> {
        let response = self
            .request(Method::GET, &format!("/api/accounts/users/{id}/"))
            .send()
            .await?;
        let response = self.check(response).await?;

        Ok(response.json().await?)
    }

    async fn update_user(&self, id: i64, patch: &UserPatch) -> ClientResult<UserRecord> {
        let response = self
            .request(Method::PATCH, &format!("/api/accounts/users/{id}/"))
            .json(patch)
            .send()
            .await?;
        let response = self.check(response).await?;

        Ok(response.json().await?)
    }

    async fn delete_user(&self, id: i64) -> ClientResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/accounts/users/{id}/"))
            .send()
            .await?;
        self.check(response).await?;

        Ok(())
    }

    async fn register(&self, email: &str, username: &str, password: &str) -> ClientResult<()> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            email: &'a str,
            username: &'a str,
            password: &'a str,
        }

        let response = self
            .request(Method::POST, "/api/accounts/register/")
            .json(&RegisterRequest {
                email,
                username,
                password,
            })
            .send()
            .await?;
        self.check(response).await?;

        Ok(())
    }

    async fn user_links(&self, email: &str) -> ClientResult<FormLinks> {
        #[derive(Deserialize)]
        struct LinksResponse {
            #[serde(default)]
            form_link1: String,
            #[serde(default)]
            form_link2: String,
            #[serde(default)]
            form_link3: String,
        }

        let response = self
            .request(Method::GET, "/api/accounts/user-links/")
            .query(&[("email", email)])
            .send()
            .await?;
        let response = self.check(response).await?;

        let links: LinksResponse = response.json().await?;
        Ok([
            non_empty(links.form_link1),
            non_empty(links.form_link2),
            non_empty(links.form_link3),
        ])
    }
}

pub(crate) fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
