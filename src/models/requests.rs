//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::query::{ListQuery, SortKey, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

// == List Params ==
/// Raw query-string parameters for `GET /items`.
///
/// Everything arrives as a string on the wire; `normalize` parses the
/// numeric fields and substitutes defaults for anything absent or
/// non-numeric. Zero or negative values pass through unvalidated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Search term matched against name and category
    pub q: Option<String>,
    /// 1-based page number, as a string
    pub page: Option<String>,
    /// Page size, as a string
    pub limit: Option<String>,
    /// Sort key; unknown values fall back to store order
    pub sort: Option<String>,
}

impl ListParams {
    /// Parses the raw parameters into a normalized query.
    ///
    /// Non-numeric or missing `page` falls back to 1, `limit` to 10, and an
    /// unknown `sort` to the no-op comparator.
    pub fn normalize(&self) -> ListQuery {
        ListQuery {
            q: self.q.clone().unwrap_or_default(),
            page: self
                .page
                .as_deref()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE),
            limit: self
                .limit
                .as_deref()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            sort: SortKey::parse(self.sort.as_deref().unwrap_or("default")),
        }
    }
}

// == Create Item Request ==
/// Request body for `POST /items`.
///
/// `price` is taken as a raw JSON value so that a string price reaches the
/// validation step (and a 400) instead of failing body extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Value>,
}

/// A validated `POST /items` payload, ready for id assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl CreateItemRequest {
    /// Validates the payload field by field, short-circuiting on the first
    /// failure: `name` non-empty, then `category` non-empty, then `price` a
    /// non-negative number.
    pub fn validate(self) -> Result<NewItem> {
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::Validation("Invalid item data: name is required".to_string()))?;

        let category = self.category.filter(|category| !category.is_empty()).ok_or_else(|| {
            ApiError::Validation("Invalid item data: category is required".to_string())
        })?;

        let price = self
            .price
            .as_ref()
            .and_then(Value::as_f64)
            .filter(|price| *price >= 0.0)
            .ok_or_else(|| {
                ApiError::Validation(
                    "Invalid item data: price must be a non-negative number".to_string(),
                )
            })?;

        Ok(NewItem {
            name,
            category,
            price,
        })
    }
}
