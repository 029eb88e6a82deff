//! Catalog item model
//!
//! The single record type owned by the store and copied onto the wire.

use serde::{Deserialize, Serialize};

// == Item ==
/// A catalog item as stored in the backing file and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique server-assigned id (milliseconds since epoch at creation)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Category label
    pub category: String,
    /// Price, non-negative
    pub price: f64,
}
