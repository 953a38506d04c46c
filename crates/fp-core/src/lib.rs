pub mod access;
pub mod models;

#[cfg(test)]
mod tests;

pub use access::{AccessLevel, can_access};
pub use models::cell_value::CellValue;
pub use models::identity::{FORM_LINK_SLOTS, Identity};
pub use models::tabular_grid::TabularGrid;
pub use models::user_record::{UserProfile, UserRecord};
