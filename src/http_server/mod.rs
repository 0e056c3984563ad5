//! # HTTP Server Module
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/components` - Create and list components
//! - `/components/:id` - Fetch a component

pub mod component_routes;
pub mod config;
pub mod health_routes;
pub mod server;

pub use component_routes::ComponentsState;
pub use config::{ConfigError, ServerConfig};
pub use server::{open_store, HttpServer};
