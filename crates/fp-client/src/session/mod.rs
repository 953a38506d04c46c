pub mod store;
pub mod store_error;

pub(crate) mod slot;
