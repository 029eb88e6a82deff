//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::cache::{query_signature, ResponseCache};
use crate::error::{ApiError, Result};
use crate::models::{CreateItemRequest, HealthResponse, Item, ListParams, PageResult};
use crate::query;
use crate::stats::{calculate_stats, StatsCache, StatsSnapshot};
use crate::store::FileStore;

/// Application state shared across all handlers.
///
/// The caches are explicit, constructor-injected components owned by the
/// server process, with invalidation exposed for tests.
#[derive(Clone)]
pub struct AppState {
    /// Flat-file item store
    pub store: Arc<FileStore>,
    /// TTL cache over computed list pages
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Mtime-validated stats snapshot cache
    pub stats: Arc<RwLock<StatsCache>>,
}

impl AppState {
    /// Creates a new AppState over the given store with the given response
    /// cache TTL.
    pub fn new(store: FileStore, cache_ttl: Duration) -> Self {
        Self {
            store: Arc::new(store),
            cache: Arc::new(RwLock::new(ResponseCache::new(cache_ttl))),
            stats: Arc::new(RwLock::new(StatsCache::new())),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            FileStore::new(config.data_path.clone()),
            Duration::from_secs(config.cache_ttl_secs),
        )
    }
}

/// Handler for GET /items
///
/// Runs the list-query pipeline: consult the response cache, and on a miss
/// read the store, execute filter/sort/paginate, and cache the page.
pub async fn list_items_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PageResult>> {
    let list_query = params.normalize();
    let signature = query_signature(&list_query);

    // Check cache first (write lock: lookup drops expired entries)
    if let Some(cached) = state.cache.write().await.lookup(&signature) {
        debug!(%signature, "list query served from cache");
        return Ok(Json(cached));
    }

    let items = state.store.read_all().await?;
    let result = query::execute(&items, &list_query);

    state
        .cache
        .write()
        .await
        .store(signature, result.clone());

    Ok(Json(result))
}

/// Handler for GET /items/:id
///
/// The id segment must parse as an integer; an unknown id is a 404.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>> {
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::Validation("Invalid ID parameter".to_string()))?;

    let items = state.store.read_all().await?;
    let item = items
        .into_iter()
        .find(|item| item.id == id)
        .ok_or_else(|| ApiError::NotFound("Item not found".to_string()))?;

    Ok(Json(item))
}

/// Handler for POST /items
///
/// Validates the payload, assigns the id from the current time in
/// milliseconds, appends to the collection, persists it wholesale, and
/// clears the response cache.
pub async fn create_item_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>)> {
    let new_item = request.validate()?;

    let mut items = state.store.read_all().await?;
    let item = Item {
        id: chrono::Utc::now().timestamp_millis(),
        name: new_item.name,
        category: new_item.category,
        price: new_item.price,
    };

    items.push(item.clone());
    state.store.write_all(&items).await?;

    // Every cached page may now be stale
    state.cache.write().await.invalidate_all();

    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for GET /stats
///
/// Serves the cached snapshot while the backing file's mtime is unchanged;
/// otherwise recomputes from a fresh read.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsSnapshot>> {
    if let Ok(modified) = state.store.modified().await {
        if let Some(snapshot) = state.stats.read().await.lookup(modified) {
            debug!("stats served from cache");
            return Ok(Json(snapshot));
        }
    }

    let items = state.store.read_all().await?;
    let snapshot = calculate_stats(&items);

    let modified = state.store.modified().await?;
    state
        .stats
        .write()
        .await
        .store(snapshot.clone(), modified);

    Ok(Json(snapshot))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
