//! Request and Response models for the catalog API
//!
//! This module defines the item record and the DTOs (Data Transfer Objects)
//! used for serializing/deserializing HTTP request and response bodies.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::Item;
pub use requests::{CreateItemRequest, ListParams, NewItem};
pub use responses::{HealthResponse, PageResult, Pagination};
