//! Directory Tests
//!
//! Tests verify:
//! - Insert and lookup
//! - Duplicate rejection without overwrite
//! - Removal for every node shape
//! - Ascending traversal
//! - Degenerate (list-shaped) trees

use contactbook::directory::Directory;
use contactbook::{BookError, Contact};
use proptest::prelude::*;

// =============================================================================
// Helper Functions
// =============================================================================

fn directory_with(phones: &[&str]) -> Directory {
    let mut directory = Directory::new();
    for phone in phones {
        directory
            .insert(Contact::new(format!("name-{}", phone), *phone))
            .unwrap();
    }
    directory
}

fn phones(directory: &Directory) -> Vec<String> {
    directory.iter().map(|c| c.phone().to_string()).collect()
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_directory_is_empty() {
    let directory = Directory::new();
    assert!(directory.is_empty());
    assert_eq!(directory.len(), 0);
    assert_eq!(directory.height(), 0);
    assert!(directory.first().is_none());
    assert!(directory.traverse().is_empty());
}

#[test]
fn test_insert_and_find() {
    let mut directory = Directory::new();
    directory.insert(Contact::new("Alice", "100")).unwrap();

    let found = directory.find("100").unwrap();
    assert_eq!(found.name(), "Alice");
    assert_eq!(found.phone(), "100");
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_find_missing_phone() {
    let directory = directory_with(&["50", "30", "70"]);
    assert!(directory.find("40").is_none());
    assert!(!directory.contains("40"));
    assert!(directory.contains("30"));
}

#[test]
fn test_duplicate_insert_is_rejected() {
    let mut directory = Directory::new();
    directory.insert(Contact::new("Alice", "100")).unwrap();

    let result = directory.insert(Contact::new("Mallory", "100"));

    assert!(matches!(result, Err(BookError::DuplicateKey(ref p)) if p == "100"));
    assert_eq!(directory.find("100").unwrap().name(), "Alice");
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_phones_compare_as_strings() {
    let directory = directory_with(&["9", "10", "100", "050"]);
    assert_eq!(phones(&directory), vec!["050", "10", "100", "9"]);
    assert_eq!(directory.first().unwrap().phone(), "050");
}

// =============================================================================
// Traversal Tests
// =============================================================================

#[test]
fn test_traverse_scenario() {
    let mut directory = Directory::new();
    directory.insert(Contact::new("Alice", "100")).unwrap();
    directory.insert(Contact::new("Bob", "050")).unwrap();
    directory.insert(Contact::new("Carol", "075")).unwrap();

    assert_eq!(
        directory.traverse(),
        vec![
            Contact::new("Bob", "050"),
            Contact::new("Carol", "075"),
            Contact::new("Alice", "100"),
        ]
    );
}

#[test]
fn test_traverse_is_a_snapshot() {
    let mut directory = directory_with(&["2", "1", "3"]);
    let snapshot = directory.traverse();

    directory.remove("2");
    directory.insert(Contact::new("new", "4")).unwrap();

    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[1].phone(), "2");
}

#[test]
fn test_into_iterator_for_reference() {
    let directory = directory_with(&["b", "a", "c"]);
    let mut seen = Vec::new();
    for contact in &directory {
        seen.push(contact.phone());
    }
    assert_eq!(seen, vec!["a", "b", "c"]);
}

// =============================================================================
// Removal Tests
// =============================================================================

#[test]
fn test_remove_leaf() {
    let mut directory = directory_with(&["50", "30", "70"]);

    let removed = directory.remove("30").unwrap();

    assert_eq!(removed, Contact::new("name-30", "30"));
    assert_eq!(phones(&directory), vec!["50", "70"]);
    assert_eq!(directory.len(), 2);
}

#[test]
fn test_remove_node_with_one_child() {
    let mut directory = directory_with(&["50", "30", "20"]);

    let removed = directory.remove("30").unwrap();

    assert_eq!(removed.phone(), "30");
    assert_eq!(phones(&directory), vec!["20", "50"]);
    assert_eq!(directory.height(), 2);
}

#[test]
fn test_remove_root_with_only_right_child() {
    let mut directory = directory_with(&["50", "70", "60"]);

    directory.remove("50").unwrap();

    assert_eq!(directory.root_contact().unwrap().phone(), "70");
    assert_eq!(phones(&directory), vec!["60", "70"]);
}

#[test]
fn test_remove_node_with_two_children() {
    let mut directory = directory_with(&["50", "30", "70", "20", "40", "60", "80"]);

    let removed = directory.remove("50").unwrap();

    // The original contact is returned, not the successor
    assert_eq!(removed, Contact::new("name-50", "50"));
    assert_eq!(directory.root_contact().unwrap(), &Contact::new("name-60", "60"));
    assert!(directory.find("50").is_none());
    assert!(directory.find("60").is_some());
    assert_eq!(phones(&directory), vec!["20", "30", "40", "60", "70", "80"]);
    assert_eq!(directory.len(), 6);
}

#[test]
fn test_remove_inner_node_with_two_children() {
    let mut directory = directory_with(&["50", "30", "70", "20", "40", "35", "45"]);

    let removed = directory.remove("30").unwrap();

    assert_eq!(removed.phone(), "30");
    assert_eq!(phones(&directory), vec!["20", "35", "40", "45", "50", "70"]);
}

#[test]
fn test_remove_missing_phone() {
    let mut directory = directory_with(&["50", "30"]);

    assert!(directory.remove("99").is_none());
    assert_eq!(directory.len(), 2);
    assert_eq!(phones(&directory), vec!["30", "50"]);
}

#[test]
fn test_remove_everything() {
    let all = ["50", "30", "70", "20", "40", "60", "80"];
    let mut directory = directory_with(&all);

    for phone in all {
        assert_eq!(directory.remove(phone).unwrap().phone(), phone);
    }

    assert!(directory.is_empty());
    assert!(directory.root_contact().is_none());
}

#[test]
fn test_reinsert_after_remove() {
    let mut directory = directory_with(&["50"]);
    let removed = directory.remove("50").unwrap();

    directory.insert(removed.clone()).unwrap();

    assert_eq!(directory.find("50"), Some(&removed));
}

// =============================================================================
// Degenerate Tree Tests
// =============================================================================

#[test]
fn test_sorted_inserts_build_a_deep_tree() {
    let mut directory = Directory::new();
    for i in 0..5_000 {
        directory
            .insert(Contact::new("n", format!("{:06}", i)))
            .unwrap();
    }

    assert_eq!(directory.height(), 5_000);
    assert_eq!(directory.iter().count(), 5_000);
    assert!(directory.find("004999").is_some());
    assert_eq!(directory.remove("000000").unwrap().phone(), "000000");
    // Dropping the directory here must not recurse per level
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Property: traversal is strictly ascending for any insert sequence
    #[test]
    fn prop_traversal_strictly_ascending(keys in prop::collection::vec("[0-9]{1,4}", 0..64)) {
        let mut directory = Directory::new();
        for key in &keys {
            let _ = directory.insert(Contact::new("x", key.clone()));
        }

        let listed = phones(&directory);
        prop_assert!(listed.windows(2).all(|w| w[0] < w[1]));

        let mut expected = keys.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(listed, expected);
    }

    /// Property: removals keep the order and drop exactly the removed phone
    #[test]
    fn prop_remove_preserves_order(
        keys in prop::collection::btree_set("[0-9]{1,3}", 1..48),
        pick in any::<prop::sample::Index>(),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut directory = Directory::new();
        // Insert in a scrambled order so the tree is not a list
        let mut order = keys.clone();
        order.sort_by_key(|k| k.chars().rev().collect::<String>());
        for key in order {
            directory.insert(Contact::new("x", key)).unwrap();
        }

        let target = pick.get(&keys).clone();
        let removed = directory.remove(&target);
        prop_assert_eq!(removed.map(|c| c.phone().to_string()), Some(target.clone()));

        let expected: Vec<String> = keys.iter().filter(|k| **k != target).cloned().collect();
        prop_assert_eq!(phones(&directory), expected);
        prop_assert_eq!(directory.len(), keys.len() - 1);
    }

    /// Property: a duplicate insert never changes the stored contact
    #[test]
    fn prop_duplicate_never_overwrites(key in "[0-9]{1,6}", first in "[a-z]{1,8}", second in "[a-z]{1,8}") {
        let mut directory = Directory::new();
        directory.insert(Contact::new(first.clone(), key.clone())).unwrap();

        let dup = directory.insert(Contact::new(second, key.clone()));

        prop_assert!(matches!(dup, Err(BookError::DuplicateKey(_))));
        prop_assert_eq!(directory.find(&key).unwrap().name(), first.as_str());
    }
}
