//! This crate provides CIDR value types with exact bit arithmetic, and a longest-prefix-first
//! search tree (LPFST) that answers "does this address or network belong to any of the inserted
//! blocks" in at most `W` steps, where `W` is the address width (32 for IPv4, 128 for IPv6).
//!
//! # CIDR values
//!
//! [`Cidr4`] and [`Cidr6`] store an address (as `u32` / `u128`) together with a prefix length. In
//! contrast to most ecosystem prefix types, the address part is *not* masked: `"127.0.0.5/24"`
//! keeps all its host bits, and [`Cidr::net`] derives the network block from it. Two parsing
//! paths exist: a strict [`FromStr`](std::str::FromStr) returning [`ParseCidrError`], and
//! [`Cidr4::parse_lossy`] / [`Cidr6::parse_lossy`] which never fail and collapse malformed input
//! into the zero block.
//!
//! # Description of the Tree
//!
//! [`Lpfst`] is a treap: a binary radix trie keyed by the address bits (at depth `d`, bit `d` of
//! the entry decides between the left and right child), with the heap condition that a node's
//! effective prefix length is at least as large as those of its children. Longer (more specific)
//! prefixes therefore sit closer to the root, and a membership query can stop at the first node
//! whose prefix covers the queried block. Non-network blocks are stored with effective length
//! `W`, so a host entry shadows any network entry on its path.
//!
//! Both insertion and lookup run in `O(W)` independent of the number of entries.
//!
//! ```
//! use lpfst::{Cidr4, Lpfst4};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tree: Lpfst4<&str> = Lpfst4::new();
//! tree.insert("10.0.0.0/8".parse()?, "private");
//! tree.insert("10.0.2.0/24".parse()?, "lab");
//! assert_eq!(tree.lookup_addr(0x0a00024du32), Some(&"lab"));
//! assert_eq!(tree.lookup_addr(0x0a630001u32), Some(&"private"));
//! assert_eq!(tree.lookup_addr(0x08080808u32), None);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

#[cfg(feature = "serde")]
mod serde;

pub mod cidr;
pub mod reserved;
pub mod tree;

pub use cidr::{Cidr, Cidr4, Cidr6, Hosts, ParseCidrError};
pub use tree::{IntoIter, Iter, Lpfst, Lpfst4, Lpfst6, Match};
