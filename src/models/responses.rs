//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::models::Item;

// == Pagination ==
/// Pagination metadata accompanying every page of items.
///
/// Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number that was requested
    pub page: i64,
    /// Requested page size
    pub page_size: i64,
    /// Number of items after filtering, before pagination
    pub total: i64,
    /// ceil(total / pageSize), 0 when pageSize is not positive
    pub total_pages: i64,
    /// Whether a further page exists
    pub has_next: bool,
    /// Whether a prior page exists
    pub has_prev: bool,
}

// == Page Result ==
/// One page of items plus its pagination block, as returned by
/// `GET /items` and consumed by the client fetch controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<Item>,
    pub pagination: Pagination,
}

// == Health Response ==
/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_wire_names_are_camel_case() {
        let pagination = Pagination {
            page: 2,
            page_size: 2,
            total: 5,
            total_pages: 3,
            has_next: true,
            has_prev: true,
        };

        let json = serde_json::to_value(&pagination).unwrap();
        assert_eq!(json["pageSize"], 2);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["hasNext"], true);
        assert_eq!(json["hasPrev"], true);
    }

    #[test]
    fn test_page_result_roundtrip() {
        let result = PageResult {
            items: vec![Item {
                id: 1,
                name: "Laptop Pro".to_string(),
                category: "Electronics".to_string(),
                price: 2499.0,
            }],
            pagination: Pagination {
                page: 1,
                page_size: 10,
                total: 1,
                total_pages: 1,
                has_next: false,
                has_prev: false,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: PageResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
