//! Membership queries on the tree.

use super::{entry_len, Lpfst};
use crate::cidr::{bit_is_set, has_prefix, Cidr};

/// The outcome of a successful [`Lpfst::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match<'a, T> {
    /// The queried block lies within a stored entry; its payload is attached.
    Covered(&'a T),
    /// The queried network is broader than every stored entry along its bit path, so it encloses
    /// whatever the tree holds there. No single payload applies.
    Encloses,
}

impl<'a, T> Match<'a, T> {
    /// The payload, if one applies.
    pub fn value(&self) -> Option<&'a T> {
        match *self {
            Match::Covered(value) => Some(value),
            Match::Encloses => None,
        }
    }
}

impl<C: Cidr, T> Lpfst<C, T> {
    /// Look up a block, returning how it relates to the stored entries.
    ///
    /// [`Match::Covered`] carries the payload of the entry covering the query. A network query
    /// whose prefix length is outgrown by the walk (the tree holds longer prefixes below the
    /// query's own depth on its path) yields [`Match::Encloses`] instead: the query is not
    /// inside any entry, but entries may be inside it.
    ///
    /// ```
    /// use lpfst::{Cidr4, Lpfst4, Match};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut tree: Lpfst4<&str> = Lpfst4::new();
    /// tree.insert("10.0.0.0/8".parse()?, "private");
    /// assert_eq!(tree.lookup(&"10.1.2.3/32".parse()?), Some(Match::Covered(&"private")));
    /// assert_eq!(tree.lookup(&"10.0.0.0/9".parse()?), Some(Match::Covered(&"private")));
    /// assert_eq!(tree.lookup(&"10.0.0.0/7".parse()?), None);
    /// assert_eq!(tree.lookup(&"11.0.0.0/8".parse()?), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn lookup(&self, query: &C) -> Option<Match<'_, T>> {
        let is_net = query.is_network();
        let qlen = query.prefix_len();
        let addr = query.repr();
        let mut node = self.root.as_deref();
        let mut level = 0u8;
        while let Some(cur) = node {
            if is_net && qlen < level {
                return Some(Match::Encloses);
            }
            if (!is_net || qlen >= cur.len) && has_prefix(addr, cur.prefix, cur.len) {
                return Some(Match::Covered(&cur.value));
            }
            node = if bit_is_set(addr, level) {
                cur.right.as_deref()
            } else {
                cur.left.as_deref()
            };
            level += 1;
        }
        None
    }

    /// Whether the block belongs to any of the stored entries, or (for a network query) encloses
    /// part of the tree. Equivalent to `self.lookup(query).is_some()`.
    pub fn check(&self, query: &C) -> bool {
        self.lookup(query).is_some()
    }

    /// Look up a single host address, returning the payload of the covering entry.
    ///
    /// ```
    /// use lpfst::{Cidr6, Lpfst6};
    /// use std::net::Ipv6Addr;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut tree: Lpfst6<&str> = Lpfst6::new();
    /// tree.insert("2001:db8::/32".parse()?, "documentation");
    /// let addr: Ipv6Addr = "2001:db8::42".parse()?;
    /// assert_eq!(tree.lookup_addr(addr), Some(&"documentation"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn lookup_addr(&self, addr: impl Into<C::Repr>) -> Option<&T> {
        let addr = addr.into();
        let mut node = self.root.as_deref();
        let mut level = 0u8;
        while let Some(cur) = node {
            if has_prefix(addr, cur.prefix, cur.len) {
                return Some(&cur.value);
            }
            node = if bit_is_set(addr, level) {
                cur.right.as_deref()
            } else {
                cur.left.as_deref()
            };
            level += 1;
        }
        None
    }

    /// Whether a single host address belongs to any of the stored entries.
    pub fn check_addr(&self, addr: impl Into<C::Repr>) -> bool {
        self.lookup_addr(addr).is_some()
    }

    /// Get the payload stored for exactly this block, matching on the effective length and the
    /// prefix bits.
    pub fn get(&self, block: &C) -> Option<&T> {
        let len = entry_len(block);
        let prefix = block.repr();
        let mut node = self.root.as_deref();
        let mut level = 0u8;
        while let Some(cur) = node {
            if cur.len == len && has_prefix(prefix, cur.prefix, cur.len) {
                return Some(&cur.value);
            }
            if len == level {
                return None;
            }
            node = if bit_is_set(prefix, level) {
                cur.right.as_deref()
            } else {
                cur.left.as_deref()
            };
            level += 1;
        }
        None
    }
}
