//! Incremental List Presenter
//!
//! Drives the fetch controller the way the list view does: debounced
//! search input, a minimum perceived-loading window for the skeleton
//! indicator, and infinite-scroll page requests. All delayed work runs on
//! spawned tasks whose handles are aborted on unmount, and every async
//! completion re-checks the mounted flag before touching state.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::client::controller::{FetchController, FetchParams};
use crate::query::SortKey;

// == Presenter Config ==
/// Timing and paging knobs, injectable so tests can compress time.
#[derive(Debug, Clone)]
pub struct PresenterConfig {
    /// Quiet window after the last keystroke before a search fires
    pub debounce: Duration,
    /// Minimum time the skeleton stays visible once a fetch is triggered
    pub min_loading: Duration,
    /// Fixed page size used for initial load and infinite scroll
    pub page_size: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_loading: Duration::from_millis(500),
            page_size: 20,
        }
    }
}

// == Presenter Shared State ==
/// State shared between the presenter handle and its spawned timers.
struct PresenterShared {
    mounted: AtomicBool,
    skeleton: AtomicBool,
    search_query: Mutex<String>,
    sort: Mutex<SortKey>,
    debounce_timer: Mutex<Option<JoinHandle<()>>>,
    skeleton_timer: Mutex<Option<JoinHandle<()>>>,
}

// == List Presenter ==
/// Orchestrates the controller on behalf of a list view.
///
/// Cloning is cheap: clones share the same state and timers, so a clone
/// can be handed to a spawned task the same way the state handle is.
#[derive(Clone)]
pub struct ListPresenter {
    controller: Arc<FetchController>,
    config: PresenterConfig,
    shared: Arc<PresenterShared>,
}

impl ListPresenter {
    // == Constructors ==
    /// Creates a mounted presenter with the default timings.
    pub fn new(controller: Arc<FetchController>) -> Self {
        Self::with_config(controller, PresenterConfig::default())
    }

    /// Creates a mounted presenter with explicit timings.
    pub fn with_config(controller: Arc<FetchController>, config: PresenterConfig) -> Self {
        Self {
            controller,
            config,
            shared: Arc::new(PresenterShared {
                mounted: AtomicBool::new(true),
                skeleton: AtomicBool::new(false),
                search_query: Mutex::new(String::new()),
                sort: Mutex::new(SortKey::Default),
                debounce_timer: Mutex::new(None),
                skeleton_timer: Mutex::new(None),
            }),
        }
    }

    // == Accessors ==
    /// The controller this presenter drives.
    pub fn controller(&self) -> &Arc<FetchController> {
        &self.controller
    }

    /// Whether the skeleton indicator should be visible.
    pub fn show_skeleton(&self) -> bool {
        self.shared.skeleton.load(Ordering::SeqCst)
    }

    /// Whether the presenter is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.shared.mounted.load(Ordering::SeqCst)
    }

    /// The current search input.
    pub fn search_query(&self) -> String {
        lock(&self.shared.search_query).clone()
    }

    /// The current sort selection.
    pub fn sort(&self) -> SortKey {
        *lock(&self.shared.sort)
    }

    // == Initial Load ==
    /// Fetches the first page at the infinite-scroll page size, holding
    /// the skeleton up for the minimum loading window.
    pub async fn load_initial(&self) {
        let sort = self.sort();
        let limit = self.config.page_size as i64;
        let controller = Arc::clone(&self.controller);

        self.with_min_loading(async move {
            controller
                .fetch_items(FetchParams {
                    page: 1,
                    limit,
                    sort,
                    ..Default::default()
                })
                .await;
        })
        .await;
    }

    // == Debounced Search ==
    /// Records a keystroke and restarts the debounce window; only the last
    /// input before a quiet window actually fetches.
    pub fn on_search_input(&self, input: &str) {
        *lock(&self.shared.search_query) = input.to_string();

        let presenter = self.clone();
        let query = input.to_string();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(presenter.config.debounce).await;
            if !presenter.is_mounted() {
                return;
            }
            presenter.run_search(query).await;
        });

        // Restarting the window: the superseded timer never fires
        if let Some(previous) = lock(&self.shared.debounce_timer).replace(handle) {
            previous.abort();
        }
    }

    /// Searches immediately with the current input (the search-button /
    /// enter-key path), bypassing the debounce window.
    pub async fn search_now(&self) {
        let query = self.search_query();
        self.run_search(query).await;
    }

    async fn run_search(&self, query: String) {
        let sort = self.sort();
        let controller = Arc::clone(&self.controller);
        self.with_min_loading(async move {
            controller.search_items(&query, sort).await;
        })
        .await;
    }

    // == Sort ==
    /// Applies a new sort order, resetting the list to page 1.
    pub async fn on_sort_change(&self, sort: SortKey) {
        *lock(&self.shared.sort) = sort;
        let controller = Arc::clone(&self.controller);
        self.with_min_loading(async move {
            controller.sort_items(sort).await;
        })
        .await;
    }

    // == Infinite Scroll ==
    /// Requests the page covering `start_index` when the controller is
    /// idle and the last pagination block reports more data.
    pub async fn maybe_load_more(&self, start_index: usize) {
        if self.controller.loading().await {
            return;
        }
        let Some(pagination) = self.controller.pagination().await else {
            return;
        };
        if !pagination.has_next {
            return;
        }

        let page = next_page_for_index(start_index, self.config.page_size);
        let sort = self.sort();
        let query = self.search_query();
        self.controller.load_more_items(page, sort, &query).await;
    }

    /// An index is loaded when it falls within the held collection, or
    /// when no further data exists at all.
    pub async fn is_item_loaded(&self, index: usize) -> bool {
        let state = self.controller.state().await;
        match state.pagination {
            Some(ref pagination) if pagination.has_next => index < state.items.len(),
            _ => true,
        }
    }

    // == Unmount ==
    /// Tears the presenter down: no state mutation may run afterwards.
    /// Pending debounce and skeleton timers are aborted.
    pub fn unmount(&self) {
        self.shared.mounted.store(false, Ordering::SeqCst);
        if let Some(handle) = lock(&self.shared.debounce_timer).take() {
            handle.abort();
        }
        if let Some(handle) = lock(&self.shared.skeleton_timer).take() {
            handle.abort();
        }
    }

    // == Minimum Loading Window ==
    /// Runs a fetch with the skeleton raised, keeping it visible for at
    /// least the configured minimum from the trigger. A response slower
    /// than the minimum clears it immediately on arrival.
    async fn with_min_loading<F>(&self, fetch: F)
    where
        F: Future<Output = ()>,
    {
        if !self.is_mounted() {
            return;
        }
        self.shared.skeleton.store(true, Ordering::SeqCst);
        let started = Instant::now();

        fetch.await;

        if !self.is_mounted() {
            return;
        }
        let elapsed = started.elapsed();
        if elapsed >= self.config.min_loading {
            self.shared.skeleton.store(false, Ordering::SeqCst);
            return;
        }

        let remaining = self.config.min_loading - elapsed;
        let presenter = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(remaining).await;
            if presenter.is_mounted() {
                presenter.shared.skeleton.store(false, Ordering::SeqCst);
            }
        });
        if let Some(previous) = lock(&self.shared.skeleton_timer).replace(handle) {
            previous.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().expect("presenter lock poisoned")
}

// == Next Page ==
/// The page covering the first unloaded index at the fixed page size.
pub(crate) fn next_page_for_index(start_index: usize, page_size: usize) -> i64 {
    (start_index / page_size) as i64 + 1
}
