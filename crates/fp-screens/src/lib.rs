//! Screen controllers: the state machines behind each portal screen,
//! decoupled from any particular front-end.

pub mod guard;
pub mod results;
pub mod users;

mod error;

#[cfg(test)]
mod tests;

pub use error::{ScreenError, ScreenResult};
pub use guard::RouteDecision;
pub use results::ResultsScreen;
pub use users::{EditBuffer, UsersScreen};
