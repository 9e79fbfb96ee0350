pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;

pub use database::activity_registry::ActivityRegistry;
pub use web::app::build_router;
