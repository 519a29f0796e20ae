//! API Module
//!
//! HTTP handlers and routing for the cache admin REST API.
//!
//! # Endpoints
//! - `PUT /cache` / `DELETE /cache` - Store a value / clear the cache
//! - `GET /cache/:key` / `DELETE /cache/:key` - Read / delete a key
//! - `GET /cache/:key/exists` - Check for a live entry
//! - `POST /cache/sweep` - Remove expired entries
//! - `GET /stats`, `PATCH /config`, `GET /health`

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
