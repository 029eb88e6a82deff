//! Client Fetch Controller
//!
//! Holds the client-side list state machine: the item collection, the
//! loading flag, the last error and the last pagination block, updated by
//! list queries against the catalog API.

use std::collections::HashSet;

use tokio::sync::RwLock;

use crate::client::LOAD_MORE_PAGE_SIZE;
use crate::models::{Item, PageResult, Pagination};
use crate::query::{SortKey, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

// == Fetch Params ==
/// Parameters for one list fetch, including the append-vs-replace merge
/// discipline.
#[derive(Debug, Clone)]
pub struct FetchParams {
    /// Search term
    pub q: String,
    /// 1-based page to request
    pub page: i64,
    /// Page size to request
    pub limit: i64,
    /// Sort order to request
    pub sort: SortKey,
    /// Merge the response into the held collection instead of replacing it
    pub append: bool,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            q: String::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
            sort: SortKey::Default,
            append: false,
        }
    }
}

// == Fetch State ==
/// Snapshot of the controller's observable state.
#[derive(Debug, Clone, Default)]
pub struct FetchState {
    /// The held item collection, deduplicated by id across appends
    pub items: Vec<Item>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Message from the last failed fetch, cleared on the next attempt
    pub error: Option<String>,
    /// Pagination block from the last successful fetch
    pub pagination: Option<Pagination>,
}

// == Fetch Controller ==
/// Issues list queries and folds the responses into [`FetchState`].
///
/// Failures never mutate the held items; they only set `error`. There is
/// no automatic retry, and in-flight fetches are not cancelled, so a
/// stale response may land after a newer one.
pub struct FetchController {
    base_url: String,
    http: reqwest::Client,
    state: RwLock<FetchState>,
}

impl FetchController {
    // == Constructor ==
    /// Creates a controller targeting `base_url` (e.g. `http://host:3001`),
    /// with an empty collection.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            state: RwLock::new(FetchState::default()),
        }
    }

    // == State Accessors ==
    /// Clones the full observable state.
    pub async fn state(&self) -> FetchState {
        self.state.read().await.clone()
    }

    /// The currently held items.
    pub async fn items(&self) -> Vec<Item> {
        self.state.read().await.items.clone()
    }

    /// Whether a fetch is in flight.
    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Message from the last failed fetch, if any.
    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Pagination block from the last successful fetch, if any.
    pub async fn pagination(&self) -> Option<Pagination> {
        self.state.read().await.pagination.clone()
    }

    // == Fetch ==
    /// Runs one list query and merges the result into the held state.
    ///
    /// On success the pagination block is always replaced; the items are
    /// appended (id-deduplicated, existing order preserved) when
    /// `params.append` holds and the page is past the first, and replaced
    /// wholesale otherwise.
    pub async fn fetch_items(&self, params: FetchParams) {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        match self.request_page(&params).await {
            Ok(result) => {
                let mut state = self.state.write().await;
                if params.append && params.page > 1 {
                    merge_by_id(&mut state.items, result.items);
                } else {
                    state.items = result.items;
                }
                state.pagination = Some(result.pagination);
                state.loading = false;
            }
            Err(message) => {
                let mut state = self.state.write().await;
                state.error = Some(message);
                state.loading = false;
            }
        }
    }

    /// Issues the HTTP request; any transport or status failure collapses
    /// to a readable message.
    async fn request_page(&self, params: &FetchParams) -> Result<PageResult, String> {
        let url = format!("{}/items", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", params.q.clone()),
                ("page", params.page.to_string()),
                ("limit", params.limit.to_string()),
                ("sort", params.sort.as_str().to_string()),
            ])
            .send()
            .await
            .map_err(|err| format!("Request failed: {err}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP error: status {}", status.as_u16()));
        }

        response
            .json::<PageResult>()
            .await
            .map_err(|err| format!("Malformed response body: {err}"))
    }

    // == Derived Operations ==
    /// A new search: reset to page 1 and replace the collection.
    pub async fn search_items(&self, q: &str, sort: SortKey) {
        self.fetch_items(FetchParams {
            q: q.to_string(),
            page: 1,
            sort,
            ..Default::default()
        })
        .await;
    }

    /// Jump to a page; pages past the first append onto the collection.
    pub async fn load_page(&self, page: i64, sort: SortKey) {
        self.fetch_items(FetchParams {
            page,
            sort,
            append: page > 1,
            ..Default::default()
        })
        .await;
    }

    /// A sort change: reset to page 1 (dropping any search) and replace.
    pub async fn sort_items(&self, sort: SortKey) {
        self.fetch_items(FetchParams {
            page: 1,
            sort,
            ..Default::default()
        })
        .await;
    }

    /// Pagination continuation for infinite scroll: append the next page.
    pub async fn load_more_items(&self, page: i64, sort: SortKey, q: &str) {
        self.fetch_items(FetchParams {
            q: q.to_string(),
            page,
            limit: LOAD_MORE_PAGE_SIZE,
            sort,
            append: true,
        })
        .await;
    }
}

// == Merge ==
/// Appends `incoming` onto `existing`, keeping only ids not already held.
/// Existing order is preserved; genuinely new items keep their arrival
/// order at the tail.
pub(crate) fn merge_by_id(existing: &mut Vec<Item>, incoming: Vec<Item>) {
    let held: HashSet<i64> = existing.iter().map(|item| item.id).collect();
    existing.extend(incoming.into_iter().filter(|item| !held.contains(&item.id)));
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64) -> Item {
        Item {
            id,
            name: format!("item-{id}"),
            category: "Test".to_string(),
            price: id as f64,
        }
    }

    #[test]
    fn test_merge_appends_new_items_in_order() {
        let mut existing = vec![item(1), item(2)];
        merge_by_id(&mut existing, vec![item(3), item(4)]);

        let ids: Vec<i64> = existing.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_merge_skips_duplicate_ids() {
        let mut existing = vec![item(1), item(2)];
        merge_by_id(&mut existing, vec![item(2), item(3), item(1)]);

        let ids: Vec<i64> = existing.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_into_empty_collection() {
        let mut existing = Vec::new();
        merge_by_id(&mut existing, vec![item(5), item(6)]);
        assert_eq!(existing.len(), 2);
    }

    #[test]
    fn test_merge_with_empty_incoming_is_noop() {
        let mut existing = vec![item(1)];
        merge_by_id(&mut existing, Vec::new());
        assert_eq!(existing, vec![item(1)]);
    }

    #[test]
    fn test_fetch_params_defaults() {
        let params = FetchParams::default();
        assert_eq!(params.q, "");
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.sort, SortKey::Default);
        assert!(!params.append);
    }

    #[tokio::test]
    async fn test_controller_starts_empty() {
        let controller = FetchController::new("http://127.0.0.1:0");
        let state = controller.state().await;

        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.pagination.is_none());
    }
}
