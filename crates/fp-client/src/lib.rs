//! HTTP client for the accounts backend plus the client-side session store.

pub mod api;
pub mod session;

mod error;

#[cfg(test)]
mod tests;

pub use api::auth::{AuthApi, LoginResponse, SessionResponse};
pub use api::client::ApiClient;
pub use api::users::{FormLinks, UserPatch, UsersApi};
pub use error::{ClientError, ClientResult};
pub use session::store::{SessionStore, SessionView};
pub use session::store_error::StoreError;
