pub mod cell_value;
pub mod identity;
pub mod tabular_grid;
pub mod user_record;
