//! Query Module
//!
//! Server-side filtering, sorting and pagination over an in-memory snapshot
//! of the store.

mod engine;

#[cfg(test)]
mod property_tests;

pub use engine::execute;

// == Public Constants ==
/// Page number substituted when the wire value is absent or non-numeric
pub const DEFAULT_PAGE: i64 = 1;

/// Page size substituted when the wire value is absent or non-numeric
pub const DEFAULT_PAGE_SIZE: i64 = 10;

// == Sort Key ==
/// Sort order requested for a list query.
///
/// Unknown wire values parse as `Default`, which preserves store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Preserve filter-result order (which preserves store order)
    #[default]
    Default,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    /// Parses a wire value; anything unrecognized behaves as `Default`.
    pub fn parse(value: &str) -> Self {
        match value {
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            _ => SortKey::Default,
        }
    }

    /// The wire representation of this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }
}

// == List Query ==
/// A normalized list query, ready for the engine and for cache keying.
///
/// Built from [`crate::models::ListParams::normalize`], which substitutes
/// defaults for missing or non-numeric wire values.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    /// Case-insensitive substring matched against name and category
    pub q: String,
    /// 1-based page number
    pub page: i64,
    /// Page size
    pub limit: i64,
    /// Requested sort order
    pub sort: SortKey,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
            sort: SortKey::Default,
        }
    }
}
