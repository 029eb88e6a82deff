//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /items` - List items with filtering, sorting and pagination
//! - `POST /items` - Create a new item
//! - `GET /items/:id` - Retrieve a single item
//! - `GET /stats` - Aggregate statistics over the collection
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
