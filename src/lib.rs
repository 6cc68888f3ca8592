pub mod api;
pub mod collector;
pub mod config;
pub mod models;
pub mod report;
pub mod store;

mod test;
