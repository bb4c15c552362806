//! The longest-prefix-first search tree.

mod check;
mod fmt;
mod iter;
mod remove;

pub use check::Match;
pub use iter::{IntoIter, Iter};

use std::mem;

use crate::cidr::{bit_is_set, Cidr};

/// Longest-prefix-first search tree over IPv4 blocks.
pub type Lpfst4<T> = Lpfst<crate::Cidr4, T>;

/// Longest-prefix-first search tree over IPv6 blocks.
pub type Lpfst6<T> = Lpfst<crate::Cidr6, T>;

/// A longest-prefix-first search tree (LPFST) mapping CIDR blocks to payloads.
///
/// The tree is a treap over the address bits: descending from the root, the node at depth `d`
/// branches on bit `d` of the entry, and every node carries an effective prefix length at least
/// as large as those of its children. A membership query walks at most `W` levels (the address
/// width) and stops at the first node covering the queried block, so more specific entries win.
///
/// Blocks that are not networks (host bits set) are indexed with effective length `W`; they only
/// match exactly. Inserting a block that is already present replaces its payload.
#[derive(Clone)]
pub struct Lpfst<C: Cidr, T> {
    root: Option<Box<Node<C::Repr, T>>>,
    len: usize,
}

#[derive(Clone)]
pub(crate) struct Node<R, T> {
    /// Effective prefix length: `prefix_len` for networks, the address width otherwise.
    pub(crate) len: u8,
    pub(crate) prefix: R,
    pub(crate) value: T,
    pub(crate) left: Option<Box<Node<R, T>>>,
    pub(crate) right: Option<Box<Node<R, T>>>,
}

impl<R, T> Node<R, T> {
    fn new(len: u8, prefix: R, value: T) -> Self {
        Self {
            len,
            prefix,
            value,
            left: None,
            right: None,
        }
    }
}

/// The length a block is indexed under: its prefix length if it is a network, the full address
/// width otherwise.
pub(crate) fn entry_len<C: Cidr>(block: &C) -> u8 {
    if block.is_network() {
        block.prefix_len()
    } else {
        C::width()
    }
}

impl<C: Cidr, T> Default for Lpfst<C, T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<C: Cidr, T> Lpfst<C, T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Insert a block with its payload.
    ///
    /// If the exact block (same effective length, same prefix bits) is already present, its
    /// payload is replaced and the old payload is returned.
    ///
    /// An entry whose effective length equals the depth of a slot held by a strictly longer
    /// prefix has no position left on its bit path; it is dropped and `insert` returns `None`.
    ///
    /// ```
    /// use lpfst::{Cidr4, Lpfst4};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut tree: Lpfst4<u32> = Lpfst4::new();
    /// assert_eq!(tree.insert("192.168.1.0/24".parse()?, 1), None);
    /// assert_eq!(tree.insert("192.168.0.0/16".parse()?, 2), None);
    /// assert_eq!(tree.insert("192.168.1.0/24".parse()?, 3), Some(1));
    /// assert_eq!(tree.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, block: C, value: T) -> Option<T> {
        let len = entry_len(&block);
        let prefix = block.repr();
        let (old, planted) = match self.root {
            None => {
                self.root = Some(Box::new(Node::new(len, prefix, value)));
                (None, true)
            }
            Some(ref mut root) => Self::insert_in(root, len, prefix, value, 0),
        };
        if planted {
            self.len += 1;
        }
        old
    }

    /// Descend from `cur`, bubbling shorter prefixes down by field swaps so the heap condition
    /// on `len` holds, and plant the (possibly displaced) entry at the first empty slot on its
    /// own bit path. Returns the replaced payload and whether a new node was created.
    fn insert_in(
        cur: &mut Node<C::Repr, T>,
        mut len: u8,
        mut prefix: C::Repr,
        mut value: T,
        level: u8,
    ) -> (Option<T>, bool) {
        if len >= cur.len {
            mem::swap(&mut cur.len, &mut len);
            mem::swap(&mut cur.prefix, &mut prefix);
            mem::swap(&mut cur.value, &mut value);
        }
        if len == cur.len && crate::cidr::has_prefix(prefix, cur.prefix, cur.len) {
            // exact duplicate; the incoming entry took the node, the displaced twin is dropped
            return (Some(value), false);
        }
        if len == level {
            // the entry's slot is occupied by a strictly longer prefix; nowhere to put it
            return (None, false);
        }
        let child = if bit_is_set(prefix, level) {
            &mut cur.right
        } else {
            &mut cur.left
        };
        match child {
            Some(next) => Self::insert_in(next, len, prefix, value, level + 1),
            None => {
                *child = Some(Box::new(Node::new(len, prefix, value)));
                (None, true)
            }
        }
    }
}

impl<C: Cidr, T> Extend<(C, T)> for Lpfst<C, T> {
    fn extend<I: IntoIterator<Item = (C, T)>>(&mut self, iter: I) {
        for (block, value) in iter {
            self.insert(block, value);
        }
    }
}

impl<C: Cidr, T> FromIterator<(C, T)> for Lpfst<C, T> {
    fn from_iter<I: IntoIterator<Item = (C, T)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
