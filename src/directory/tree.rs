//! Directory implementation
//!
//! Binary search tree over `Contact`, ordered by phone.

use std::cmp::Ordering;
use std::mem;

use super::Iter;
use crate::error::{BookError, Result};
use crate::record::Contact;

pub(super) type Link = Option<Box<Node>>;

pub(super) struct Node {
    pub(super) contact: Contact,
    pub(super) left: Link,
    pub(super) right: Link,
}

impl Node {
    fn new(contact: Contact) -> Self {
        Self {
            contact,
            left: None,
            right: None,
        }
    }

    fn key(&self) -> &str {
        self.contact.phone()
    }
}

/// Ordered index of contacts keyed by phone
///
/// The directory owns every contact it holds. `remove` gives the removed
/// contact back by value, so nothing outside the tree ever points into it.
#[derive(Default)]
pub struct Directory {
    root: Link,
    len: usize,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact
    ///
    /// Fails with `DuplicateKey` if the phone is already indexed; the
    /// existing contact is left untouched.
    pub fn insert(&mut self, contact: Contact) -> Result<()> {
        let slot = slot_for(&mut self.root, contact.phone());
        if slot.is_some() {
            return Err(BookError::DuplicateKey(contact.phone().to_string()));
        }

        *slot = Some(Box::new(Node::new(contact)));
        self.len += 1;
        Ok(())
    }

    /// Look up a contact by phone
    pub fn find(&self, phone: &str) -> Option<&Contact> {
        let mut link = &self.root;
        while let Some(node) = link {
            if phone < node.key() {
                link = &node.left;
            } else if phone > node.key() {
                link = &node.right;
            } else {
                return Some(&node.contact);
            }
        }
        None
    }

    pub fn contains(&self, phone: &str) -> bool {
        self.find(phone).is_some()
    }

    /// Remove the contact stored under `phone`
    ///
    /// Returns the contact that was asked for. When the node has two
    /// children its in-order successor moves into the node's position,
    /// but the returned value is always the original contact.
    pub fn remove(&mut self, phone: &str) -> Option<Contact> {
        let slot = slot_for(&mut self.root, phone);

        // Two children: pull the successor up into this node
        if let Some(node) = slot.as_mut() {
            if node.left.is_some() {
                if let Some(successor) = detach_min(&mut node.right) {
                    self.len -= 1;
                    return Some(mem::replace(&mut node.contact, successor.contact));
                }
            }
        }

        // Zero or one child: splice the child (if any) into the slot
        let mut node = slot.take()?;
        *slot = node.left.take().or_else(|| node.right.take());
        self.len -= 1;
        Some(node.contact)
    }

    /// The contact with the lowest phone
    pub fn first(&self) -> Option<&Contact> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.contact)
    }

    /// Snapshot of every contact in ascending phone order
    pub fn traverse(&self) -> Vec<Contact> {
        self.iter().cloned().collect()
    }

    /// Borrowing in-order iterator
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    /// Contact stored at the root node
    pub fn root_contact(&self) -> Option<&Contact> {
        self.root.as_deref().map(|node| &node.contact)
    }
}

impl Drop for Directory {
    fn drop(&mut self) {
        // Tear down without recursing through nested boxes
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Follow the search path for `phone` and return the link where it lives
/// (occupied) or where it would be attached (empty).
fn slot_for<'a>(mut link: &'a mut Link, phone: &str) -> &'a mut Link {
    loop {
        // Decide the direction on a shared borrow, then re-borrow mutably
        let ord = match link.as_deref() {
            Some(node) => phone.cmp(node.key()),
            None => return link,
        };
        if ord == Ordering::Equal {
            return link;
        }
        if let Some(node) = link {
            link = match ord {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }
}

/// Unlink the minimum node of a subtree, splicing its right child into
/// its place. `None` if the subtree is empty.
fn detach_min(mut link: &mut Link) -> Option<Box<Node>> {
    while link.as_ref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}
