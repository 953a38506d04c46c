//! User-management screen: list, edit-in-place, delete.

use crate::{ScreenError, ScreenResult};

use fp_client::{UserPatch, UsersApi};
use fp_core::{AccessLevel, Identity, UserProfile, UserRecord, can_access};

use log::debug;

/// Working copy of one record's editable fields. At most one exists at a
/// time; starting another edit replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub form_link1: String,
    pub form_link2: String,
    pub form_link3: String,
    pub powerbi_link: String,
}

impl EditBuffer {
    fn from_record(record: &UserRecord) -> Self {
        let profile = record.profile_or_default();
        Self {
            user_id: record.id,
            username: record.username.clone(),
            email: record.email.clone(),
            form_link1: profile.form_link1.unwrap_or_default(),
            form_link2: profile.form_link2.unwrap_or_default(),
            form_link3: profile.form_link3.unwrap_or_default(),
            powerbi_link: profile.powerbi_link.unwrap_or_default(),
        }
    }

    fn to_patch(&self) -> UserPatch {
        UserPatch {
            username: self.username.clone(),
            email: self.email.clone(),
            profile: UserProfile {
                form_link1: Some(self.form_link1.clone()),
                form_link2: Some(self.form_link2.clone()),
                form_link3: Some(self.form_link3.clone()),
                powerbi_link: Some(self.powerbi_link.clone()),
            },
        }
    }
}

/// State of the user-management screen.
///
/// The working set keeps whatever order the backend returned; no client-side
/// sort is ever applied.
#[derive(Debug, Default)]
pub struct UsersScreen {
    working_set: Vec<UserRecord>,
    edit: Option<EditBuffer>,
    error: Option<String>,
}

impl UsersScreen {
    /// Open the screen for `identity`. Admin only; the route guard already
    /// checked, this check is deliberately redundant.
    pub fn open(identity: Option<&Identity>) -> ScreenResult<Self> {
        if !can_access(identity, AccessLevel::Admin) {
            return Err(ScreenError::permission_denied());
        }
        Ok(Self::default())
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.working_set
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editing(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditBuffer> {
        self.edit.as_mut()
    }

    /// Fetch the working set. Failure becomes the screen's inline error
    /// message; it is never propagated to the caller.
    pub async fn load<A: UsersApi + Sync>(&mut self, api: &A) {
        match api.list_users().await {
            Ok(users) => {
                debug!("Loaded {} users", users.len());
                self.working_set = users;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    /// Copy the target's editable fields into the edit buffer.
    pub fn begin_edit(&mut self, id: i64) -> ScreenResult<()> {
        let record = self
            .working_set
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| ScreenError::unknown_user(id))?;
        self.edit = Some(EditBuffer::from_record(record));
        Ok(())
    }

    /// Discard the edit buffer.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Send the edit buffer as a partial update.
    ///
    /// On success the backend's returned representation replaces the record
    /// in the working set and the buffer is cleared. On failure both the
    /// working set and the buffer stay exactly as they were; the caller
    /// surfaces the error as a blocking notification.
    pub async fn save<A: UsersApi + Sync>(&mut self, api: &A) -> ScreenResult<()> {
        let buffer = self.edit.as_ref().ok_or_else(ScreenError::no_active_edit)?;

        let updated = api.update_user(buffer.user_id, &buffer.to_patch()).await?;

        if let Some(record) = self
            .working_set
            .iter_mut()
            .find(|u| u.id == updated.id)
        {
            *record = updated;
        }
        self.edit = None;
        Ok(())
    }

    /// Delete a user. The caller performs the explicit confirmation first.
    ///
    /// On success the record is removed locally without a re-fetch, keeping
    /// the relative order of the rest. On failure the working set stays
    /// untouched and the caller surfaces the error.
    pub async fn delete<A: UsersApi + Sync>(&mut self, api: &A, id: i64) -> ScreenResult<()> {
        api.delete_user(id).await?;
        self.working_set.retain(|u| u.id != id);
        Ok(())
    }
}
