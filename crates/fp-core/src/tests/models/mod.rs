mod identity;
mod tabular_grid;
mod user_record;
