//! # HTTP Server Module
//!
//! The JSON API in front of the item store. Request validation and the
//! mapping of store outcomes to status codes live here.
//!
//! # Endpoints
//!
//! - `/` - Welcome message
//! - `/health` - Health check
//! - `/items`, `/items/{id}` - Item CRUD

pub mod config;
pub mod errors;
pub mod item_routes;
pub mod payload;
pub mod root_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, FieldError};
pub use item_routes::{item_routes, ItemsState};
pub use server::HttpServer;
