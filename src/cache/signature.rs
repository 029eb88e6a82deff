//! Query Signature
//!
//! Normalized cache key for a list query.

use crate::query::ListQuery;

// == Query Signature ==
/// Joins the four normalized query fields into one cache key.
///
/// Callers must normalize missing optional fields to their defaults before
/// building the signature (see `ListParams::normalize`) so that equivalent
/// queries collide on the same key.
pub fn query_signature(query: &ListQuery) -> String {
    format!(
        "{}_{}_{}_{}",
        query.q,
        query.page,
        query.limit,
        query.sort.as_str()
    )
}
