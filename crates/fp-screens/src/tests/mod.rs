mod guard;

use fp_client::{ClientError, ClientResult, FormLinks, UserPatch, UsersApi};
use fp_core::{Identity, UserRecord};

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

pub(crate) fn identity(is_superuser: bool) -> Identity {
    Identity {
        id: 1,
        email: "ana@example.com".to_string(),
        username: "ana".to_string(),
        is_superuser,
        powerbi_link: None,
        form_links: [
            Some("https://docs.google.com/spreadsheets/d/1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs".to_string()),
            None,
            None,
        ],
        logged_in_at: Utc::now(),
    }
}

pub(crate) fn record(id: i64, username: &str) -> UserRecord {
    UserRecord {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        is_superuser: false,
        profile: None,
    }
}

/// In-memory stand-in for the user-management endpoints.
#[derive(Default)]
pub(crate) struct FakeUsers {
    pub users: Mutex<Vec<UserRecord>>,
    pub fail_list: bool,
    pub fail_update: bool,
    pub fail_delete: bool,
}

impl FakeUsers {
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Default::default()
        }
    }
}

#[async_trait]
impl UsersApi for FakeUsers {
    async fn list_users(&self) -> ClientResult<Vec<UserRecord>> {
        if self.fail_list {
            return Err(ClientError::api(500, "backend unavailable"));
        }
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_user(&self, id: i64) -> ClientResult<UserRecord> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| ClientError::api(404, "not found"))
    }

    async fn update_user(&self, id: i64, patch: &UserPatch) -> ClientResult<UserRecord> {
        if self.fail_update {
            return Err(ClientError::api(502, "connection reset"));
        }

        let mut users = self.users.lock().unwrap();
        let record = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| ClientError::api(404, "not found"))?;
        record.username = patch.username.clone();
        record.email = patch.email.clone();
        record.profile = Some(patch.profile.clone());
        Ok(record.clone())
    }

    async fn delete_user(&self, id: i64) -> ClientResult<()> {
        if self.fail_delete {
            return Err(ClientError::api(502, "connection reset"));
        }
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }

    async fn register(&self, email: &str, username: &str, _password: &str) -> ClientResult<()> {
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        users.push(UserRecord {
            id,
            username: username.to_string(),
            email: email.to_string(),
            is_superuser: false,
            profile: None,
        });
        Ok(())
    }

    async fn user_links(&self, _email: &str) -> ClientResult<FormLinks> {
        Ok([None, None, None])
    }
}
