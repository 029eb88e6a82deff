//! Response Cache Store
//!
//! Maps normalized query signatures to previously computed page results
//! with a fixed time-to-live.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CachedPage;
use crate::models::PageResult;

// == Response Cache ==
/// TTL cache over computed page results.
///
/// Expiry is lazy: entries are only checked (and dropped) when looked up;
/// there is no background sweep. Mutations clear the whole cache via
/// [`ResponseCache::invalidate_all`]; the cache carries no per-entry
/// dependency tracking.
#[derive(Debug)]
pub struct ResponseCache {
    /// Signature-keyed storage
    entries: HashMap<String, CachedPage>,
    /// How long an entry stays valid after being stored
    ttl: Duration,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache whose entries expire `ttl` after storage.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Lookup ==
    /// Returns the cached page for `signature` if present and still within
    /// TTL. An expired entry is removed and treated as absent.
    pub fn lookup(&mut self, signature: &str) -> Option<PageResult> {
        if let Some(entry) = self.entries.get(signature) {
            if entry.is_expired(self.ttl) {
                self.entries.remove(signature);
                return None;
            }
            return Some(entry.result.clone());
        }
        None
    }

    // == Store ==
    /// Stores a computed page under `signature`, unconditionally
    /// overwriting any previous entry and resetting its timestamp.
    pub fn store(&mut self, signature: String, result: PageResult) {
        self.entries.insert(signature, CachedPage::new(result));
    }

    // == Invalidate All ==
    /// Drops every entry. Called after any successful write to the store.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
