//! Client Module
//!
//! In-process client for the catalog API: a fetch controller holding the
//! list state machine (append-vs-replace merge, loading and error state)
//! and a presenter layering debounced search, minimum perceived loading
//! and infinite scroll on top of it.

pub mod controller;
pub mod presenter;

pub use controller::{FetchController, FetchParams, FetchState};
pub use presenter::{ListPresenter, PresenterConfig};

// == Public Constants ==
/// Page size used for the initial load and infinite-scroll continuations
pub const LOAD_MORE_PAGE_SIZE: i64 = 20;
