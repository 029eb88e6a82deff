//! Query Engine
//!
//! Executes a list query against an in-memory snapshot: filter, then a
//! stable sort, then pagination with arithmetic metadata.

use std::cmp::Ordering;

use crate::models::{Item, PageResult, Pagination};
use crate::query::{ListQuery, SortKey};

// == Execute ==
/// Runs the full filter -> sort -> paginate pipeline over `items`.
///
/// Filtering keeps items whose name or category contains `q`
/// case-insensitively; an empty `q` keeps everything. Sorting is stable,
/// so equal keys retain their filter-result order. An out-of-range page
/// yields an empty item list with a still-valid pagination block.
pub fn execute(items: &[Item], query: &ListQuery) -> PageResult {
    // Filter
    let needle = query.q.to_lowercase();
    let mut results: Vec<&Item> = if needle.is_empty() {
        items.iter().collect()
    } else {
        items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle)
            })
            .collect()
    };

    // Sort (Vec::sort_by is stable)
    match query.sort {
        SortKey::Default => {}
        SortKey::NameAsc => results.sort_by(|a, b| compare_names(a, b)),
        SortKey::NameDesc => results.sort_by(|a, b| compare_names(b, a)),
        SortKey::PriceAsc => results.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => results.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    paginate(&results, query)
}

// == Name Comparison ==
/// Case-insensitive name ordering for the `name-*` sort keys.
fn compare_names(a: &Item, b: &Item) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

// == Paginate ==
/// Slices `[start, end)` out of the filtered results and assembles the
/// pagination block.
///
/// Arithmetic is signed: a zero or negative page produces a negative start
/// index, which yields no items but still reports arithmetic metadata
/// (out-of-range inputs pass through unvalidated).
fn paginate(results: &[&Item], query: &ListQuery) -> PageResult {
    let total = results.len() as i64;
    let start = (query.page - 1).saturating_mul(query.limit);
    let end = start.saturating_add(query.limit);

    let items: Vec<Item> = if (0..total).contains(&start) && end > start {
        let upper = end.min(total) as usize;
        results[start as usize..upper]
            .iter()
            .map(|item| (*item).clone())
            .collect()
    } else {
        Vec::new()
    };

    let total_pages = if query.limit > 0 {
        (total + query.limit - 1) / query.limit
    } else {
        0
    };

    PageResult {
        items,
        pagination: Pagination {
            page: query.page,
            page_size: query.limit,
            total,
            total_pages,
            has_next: end < total,
            has_prev: query.page > 1,
        },
    }
}
