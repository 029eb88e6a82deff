//! Cache Module
//!
//! TTL-bounded caching of computed page results, keyed by normalized query
//! signature and cleared wholesale on every mutation.

mod entry;
mod signature;
mod store;

// Re-export public types
pub use entry::{current_timestamp_ms, CachedPage};
pub use signature::query_signature;
pub use store::ResponseCache;
