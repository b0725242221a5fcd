//! Tests for recent/query_list

use proptest::prelude::*;

use super::*;

fn list_of(items: &[&str], max: usize) -> RecentQueryList {
    RecentQueryList::from_stored(items.iter().map(|s| s.to_string()).collect(), max)
}

#[test]
fn test_insert_evicts_oldest() {
    let mut list = RecentQueryList::new(3);
    for q in ["a", "b", "c", "d"] {
        list.insert(q);
    }
    assert_eq!(list.as_slice(), ["d", "c", "b"]);
}

#[test]
fn test_insert_existing_moves_to_front() {
    let mut list = list_of(&["a", "b", "c"], 5);
    list.insert("b");
    assert_eq!(list.as_slice(), ["b", "a", "c"]);
}

#[test]
fn test_insert_empty_is_noop() {
    let mut list = list_of(&["a"], 5);
    assert!(!list.insert(""));
    assert!(!list.insert("   \t"));
    assert_eq!(list.as_slice(), ["a"]);
}

#[test]
fn test_insert_trims() {
    let mut list = list_of(&["rust"], 5);
    list.insert("  rust  ");
    assert_eq!(list.as_slice(), ["rust"]);
}

#[test]
fn test_insert_is_case_sensitive() {
    let mut list = RecentQueryList::new(5);
    list.insert("Rust");
    list.insert("rust");
    assert_eq!(list.as_slice(), ["rust", "Rust"]);
}

#[test]
fn test_remove_preserves_relative_order() {
    let mut list = list_of(&["a", "b", "c"], 5);
    assert!(list.remove("b"));
    assert_eq!(list.as_slice(), ["a", "c"]);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut list = list_of(&["a", "c"], 5);
    assert!(!list.remove("zzz"));
    assert!(!list.remove(""));
    assert_eq!(list.as_slice(), ["a", "c"]);
}

#[test]
fn test_remove_compares_exactly() {
    let mut list = list_of(&["a", "b"], 5);
    assert!(!list.remove(" a "));
    assert!(!list.remove("A"));
    assert_eq!(list.as_slice(), ["a", "b"]);
}

#[test]
fn test_from_stored_repairs_invariants() {
    let list = list_of(&["a", "", "a", "  b ", "c", "d"], 3);
    assert_eq!(list.as_slice(), ["a", "b", "c"]);
}

#[test]
fn test_zero_max_is_clamped() {
    let mut list = RecentQueryList::new(0);
    list.insert("a");
    list.insert("b");
    assert_eq!(list.max(), 1);
    assert_eq!(list.as_slice(), ["b"]);
}

#[test]
fn test_clear() {
    let mut list = list_of(&["a", "b"], 5);
    assert!(list.clear());
    assert!(list.is_empty());
    assert!(!list.clear());
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", " ", "a", "b", "c", "d", "e", "f", "A", " a "])
        .prop_map(String::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_length_never_exceeds_max(
        max in 1usize..8,
        inserts in prop::collection::vec(query_strategy(), 0..40),
    ) {
        let mut list = RecentQueryList::new(max);
        for q in &inserts {
            list.insert(q);
            prop_assert!(list.len() <= max);
        }
    }

    #[test]
    fn prop_no_duplicates_or_empties(
        inserts in prop::collection::vec(query_strategy(), 0..40),
        removes in prop::collection::vec(query_strategy(), 0..10),
    ) {
        let mut list = RecentQueryList::new(5);
        for q in &inserts {
            list.insert(q);
        }
        for q in &removes {
            list.remove(q);
        }

        let mut seen = std::collections::HashSet::new();
        for entry in list.iter() {
            prop_assert!(!entry.trim().is_empty());
            prop_assert!(seen.insert(entry.to_string()), "duplicate {}", entry);
        }
    }

    #[test]
    fn prop_latest_insert_is_front_and_unique(
        before in prop::collection::vec(query_strategy(), 0..20),
        between in prop::collection::vec(query_strategy(), 0..3),
        q in "[a-z]{1,4}",
    ) {
        let mut list = RecentQueryList::new(5);
        for item in &before {
            list.insert(item);
        }
        list.insert(&q);
        for item in &between {
            list.insert(item);
        }
        list.insert(&q);

        prop_assert_eq!(list.get(0), Some(q.as_str()));
        prop_assert_eq!(list.iter().filter(|e| *e == q).count(), 1);
    }

    #[test]
    fn prop_remove_keeps_order_of_rest(
        inserts in prop::collection::vec("[a-f]", 0..20),
        target in "[a-f]",
    ) {
        let mut list = RecentQueryList::new(6);
        for item in &inserts {
            list.insert(item);
        }
        let expected: Vec<String> = list
            .iter()
            .filter(|e| *e != target)
            .map(String::from)
            .collect();

        list.remove(&target);

        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }
}
