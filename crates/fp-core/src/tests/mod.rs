mod access;
mod models;
