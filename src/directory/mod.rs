//! Directory Module
//!
//! Ordered in-memory index of contacts, keyed by phone number.
//!
//! ## Responsibilities
//! - Insert without overwrite (duplicates are rejected)
//! - Point lookup by phone in O(h)
//! - Removal that hands the removed contact back to the caller
//! - Ascending traversal for listings
//!
//! ## Data Structure Choice
//! An unbalanced binary search tree of owning `Box` nodes:
//! - Phones compare lexicographically, so "050" < "075" < "100"
//! - Removing a node with two children copies its in-order successor
//!   into place, so the tree shape near the root stays stable
//! - Descent, traversal and teardown are iterative, so a degenerate
//!   (list-shaped) tree does not exhaust the stack

mod iter;
mod tree;

pub use iter::Iter;
pub use tree::Directory;
