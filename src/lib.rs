pub mod config;
pub mod handlers;
pub mod loader;
pub mod mapping;
pub mod observability;
pub mod server;
