//! Property-Based Tests for the Query Engine
//!
//! Uses proptest to verify the pagination and filtering invariants over
//! arbitrary item collections and queries.

use proptest::prelude::*;

use crate::models::Item;
use crate::query::{execute, ListQuery, SortKey};

// == Strategies ==
/// Generates item names from a small alphabet so substring matches occur
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-dA-D]{1,8}".prop_map(|s| s)
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Electronics".to_string()),
        Just("Furniture".to_string()),
        Just("Kitchen".to_string()),
    ]
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (0i64..10_000, name_strategy(), category_strategy(), 0u32..5000u32).prop_map(
        |(id, name, category, price)| Item {
            id,
            name,
            category,
            price: f64::from(price),
        },
    )
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item_strategy(), 0..40)
}

fn sort_strategy() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Default),
        Just(SortKey::NameAsc),
        Just(SortKey::NameDesc),
        Just(SortKey::PriceAsc),
        Just(SortKey::PriceDesc),
    ]
}

fn query_strategy() -> impl Strategy<Value = ListQuery> {
    ("[a-d]{0,3}", 1i64..6, 1i64..15, sort_strategy()).prop_map(|(q, page, limit, sort)| {
        ListQuery {
            q,
            page,
            limit,
            sort,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // A page never exceeds the requested limit, and the pagination block
    // satisfies its arithmetic invariants.
    #[test]
    fn prop_pagination_invariants(items in items_strategy(), query in query_strategy()) {
        let result = execute(&items, &query);
        let pagination = &result.pagination;

        prop_assert!(result.items.len() as i64 <= query.limit);
        prop_assert_eq!(
            pagination.total_pages,
            (pagination.total + query.limit - 1) / query.limit,
            "totalPages must be ceil(total / pageSize)"
        );
        prop_assert_eq!(pagination.has_prev, query.page > 1);
        prop_assert_eq!(pagination.has_next, query.page * query.limit < pagination.total);
    }

    // Every returned item matches the filter, case-insensitively, on name
    // or category.
    #[test]
    fn prop_filter_matches_name_or_category(items in items_strategy(), query in query_strategy()) {
        let result = execute(&items, &query);
        let needle = query.q.to_lowercase();

        for item in &result.items {
            prop_assert!(
                item.name.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle),
                "item {:?} does not match filter {:?}",
                item,
                query.q
            );
        }
    }

    // An empty filter is the identity: total equals the collection size.
    #[test]
    fn prop_empty_filter_is_identity(items in items_strategy(), sort in sort_strategy()) {
        let query = ListQuery { sort, ..ListQuery::default() };
        let result = execute(&items, &query);
        prop_assert_eq!(result.pagination.total, items.len() as i64);
    }

    // The default sort preserves store order exactly.
    #[test]
    fn prop_default_sort_preserves_store_order(items in items_strategy()) {
        let query = ListQuery { limit: items.len() as i64 + 1, ..ListQuery::default() };
        let result = execute(&items, &query);
        prop_assert_eq!(result.items, items);
    }

    // Sorting is stable: items with equal keys keep their relative store
    // order. Forcing every price equal makes the whole collection one
    // equivalence class under the price sorts.
    #[test]
    fn prop_price_sort_is_stable(mut items in items_strategy()) {
        for item in &mut items {
            item.price = 42.0;
        }
        let query = ListQuery {
            limit: items.len() as i64 + 1,
            sort: SortKey::PriceAsc,
            ..ListQuery::default()
        };
        let result = execute(&items, &query);
        prop_assert_eq!(result.items, items);
    }

    // Pages tile the filtered results without overlap or reordering.
    #[test]
    fn prop_pages_tile_results(items in items_strategy(), limit in 1i64..10) {
        let all = execute(&items, &ListQuery { limit: items.len() as i64 + 1, ..ListQuery::default() });

        let mut collected = Vec::new();
        let mut page = 1;
        loop {
            let result = execute(&items, &ListQuery { page, limit, ..ListQuery::default() });
            let done = !result.pagination.has_next;
            collected.extend(result.items);
            if done {
                break;
            }
            page += 1;
        }

        prop_assert_eq!(collected, all.items);
    }
}
