//! The IPv6 CIDR block.

use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

use super::{parse_cidr, Cidr, Hosts, ParseCidrError};

/// An IPv6 CIDR block: a 128-bit address and a prefix length.
///
/// Same contract as [`Cidr4`](crate::Cidr4), with `u128` as the representation. The default
/// value is the zero block `::/0`.
///
/// ```
/// use lpfst::{Cidr, Cidr6};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let block: Cidr6 = "2001:db8::5/32".parse()?;
/// assert_eq!(block.to_string(), "2001:db8::5/32");
/// assert!(!block.is_network());
/// assert_eq!(block.net(), "2001:db8::/32".parse()?);
/// assert!(block.is_in(&"2001:db8::/32".parse()?));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cidr6 {
    addr: u128,
    len: u8,
}

impl Cidr6 {
    /// Create a block from an address and a prefix length. Lengths beyond 128 are clamped.
    pub fn new(addr: impl Into<u128>, prefix_len: u8) -> Self {
        Self {
            addr: addr.into(),
            len: prefix_len.min(128),
        }
    }

    /// The address part, host bits included.
    pub fn addr(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.addr)
    }

    /// Parse a block, absorbing all errors.
    ///
    /// A missing `/N` means a host block (`/128`), a mask beyond 128 is clamped to 128, and any
    /// other malformed input yields the zero block `::/0`. Use the
    /// [`FromStr`](std::str::FromStr) implementation where errors should be surfaced instead.
    pub fn parse_lossy(s: &str) -> Self {
        let (addr, len) = match s.split_once('/') {
            None => (s, 128),
            Some((addr, len)) => match len.parse::<u32>() {
                Ok(len) => (addr, len.min(128) as u8),
                Err(_) => return Self::default(),
            },
        };
        match addr.parse::<Ipv6Addr>() {
            Ok(addr) => Self::new(addr, len),
            Err(_) => Self::default(),
        }
    }

    /// Iterate over the addresses of the block; see [`Hosts`].
    pub fn hosts(&self) -> Hosts<Self> {
        Hosts::new(self)
    }
}

impl Cidr for Cidr6 {
    type Repr = u128;

    fn repr(&self) -> u128 {
        self.addr
    }

    fn prefix_len(&self) -> u8 {
        self.len
    }

    fn from_repr_len(repr: u128, len: u8) -> Self {
        Self::new(repr, len)
    }
}

impl FromStr for Cidr6 {
    type Err = ParseCidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, len) = parse_cidr::<Ipv6Addr>(s, 128)?;
        Ok(Self::new(addr, len))
    }
}

impl fmt::Display for Cidr6 {
    /// The alternate form (`{:#}`) omits the prefix length.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.addr())
        } else {
            write!(f, "{}/{}", self.addr(), self.len)
        }
    }
}

impl fmt::Debug for Cidr6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<Ipv6Addr> for Cidr6 {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr, 128)
    }
}

impl IntoIterator for Cidr6 {
    type Item = Cidr6;
    type IntoIter = Hosts<Cidr6>;

    fn into_iter(self) -> Hosts<Cidr6> {
        self.hosts()
    }
}

#[cfg(feature = "ipnet")]
impl From<ipnet::Ipv6Net> for Cidr6 {
    fn from(net: ipnet::Ipv6Net) -> Self {
        Self::new(net.addr(), net.prefix_len())
    }
}

#[cfg(feature = "ipnet")]
impl From<Cidr6> for ipnet::Ipv6Net {
    fn from(block: Cidr6) -> Self {
        // the length is within 0..=128 by construction
        ipnet::Ipv6Net::new(block.addr(), block.len).unwrap()
    }
}
