//! itemd - A minimal item CRUD service over HTTP/JSON
//!
//! Items live in a process-lifetime, in-memory store. Nothing is persisted
//! across restarts.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod store;
