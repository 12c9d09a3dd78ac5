//! Query Queue Tests
//!
//! Tests verify:
//! - FIFO ordering
//! - Empty dequeues
//! - Lookup helpers

use contactbook::query::{Lookup, QueryQueue};
use contactbook::Contact;

#[test]
fn test_new_queue_is_empty() {
    let mut queue = QueryQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert!(queue.dequeue().is_none());
}

#[test]
fn test_dequeue_in_submission_order() {
    let mut queue = QueryQueue::new();
    queue.enqueue("p1");
    queue.enqueue("p2");
    queue.enqueue(String::from("p3"));

    assert_eq!(queue.dequeue().as_deref(), Some("p1"));
    assert_eq!(queue.dequeue().as_deref(), Some("p2"));
    assert_eq!(queue.dequeue().as_deref(), Some("p3"));
    assert!(queue.dequeue().is_none());
}

#[test]
fn test_interleaved_enqueue_dequeue() {
    let mut queue = QueryQueue::new();
    queue.enqueue("a");
    queue.enqueue("b");
    assert_eq!(queue.dequeue().as_deref(), Some("a"));

    queue.enqueue("c");
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["b", "c"]);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_duplicates_are_kept() {
    let mut queue = QueryQueue::new();
    queue.enqueue("555");
    queue.enqueue("555");
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_lookup_phone_and_status() {
    let found = Lookup::Found(Contact::new("Alice", "100"));
    let missing = Lookup::NotFound("200".to_string());

    assert_eq!(found.phone(), "100");
    assert!(found.is_found());
    assert_eq!(missing.phone(), "200");
    assert!(!missing.is_found());
}
