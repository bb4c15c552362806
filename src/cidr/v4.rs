//! The IPv4 CIDR block.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use super::{parse_cidr, Cidr, Hosts, ParseCidrError};

/// An IPv4 CIDR block: a 32-bit address and a prefix length.
///
/// The address keeps its host bits; see the [`Cidr`] trait for the derived arithmetic. The
/// default value is the zero block `0.0.0.0/0`.
///
/// ```
/// use lpfst::{Cidr, Cidr4};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let block: Cidr4 = "172.16.1.2/12".parse()?;
/// assert_eq!(block.to_string(), "172.16.1.2/12");
/// assert_eq!(block.first(), u32::from_be_bytes([172, 16, 0, 0]));
/// assert_eq!(block.last(), u32::from_be_bytes([172, 31, 255, 255]));
/// assert!(!block.is_network());
/// assert_eq!(block.net(), "172.16.0.0/12".parse()?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cidr4 {
    addr: u32,
    len: u8,
}

impl Cidr4 {
    /// Create a block from an address and a prefix length. Lengths beyond 32 are clamped.
    pub fn new(addr: impl Into<u32>, prefix_len: u8) -> Self {
        Self {
            addr: addr.into(),
            len: prefix_len.min(32),
        }
    }

    /// The address part, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.addr)
    }

    /// Parse a block, absorbing all errors.
    ///
    /// A missing `/N` means a host block (`/32`), a mask beyond 32 is clamped to 32, and any
    /// other malformed input yields the zero block `0.0.0.0/0`. Use the
    /// [`FromStr`](std::str::FromStr) implementation where errors should be surfaced instead.
    ///
    /// ```
    /// use lpfst::Cidr4;
    /// assert_eq!(Cidr4::parse_lossy("10.0.0.1"), Cidr4::new(0x0a000001u32, 32));
    /// assert_eq!(Cidr4::parse_lossy("10.0.0.1/40"), Cidr4::new(0x0a000001u32, 32));
    /// assert_eq!(Cidr4::parse_lossy("not an address"), Cidr4::default());
    /// ```
    pub fn parse_lossy(s: &str) -> Self {
        let (addr, len) = match s.split_once('/') {
            None => (s, 32),
            Some((addr, len)) => match len.parse::<u32>() {
                Ok(len) => (addr, len.min(32) as u8),
                Err(_) => return Self::default(),
            },
        };
        match addr.parse::<Ipv4Addr>() {
            Ok(addr) => Self::new(addr, len),
            Err(_) => Self::default(),
        }
    }

    /// Iterate over the addresses of the block; see [`Hosts`].
    pub fn hosts(&self) -> Hosts<Self> {
        Hosts::new(self)
    }
}

impl Cidr for Cidr4 {
    type Repr = u32;

    fn repr(&self) -> u32 {
        self.addr
    }

    fn prefix_len(&self) -> u8 {
        self.len
    }

    fn from_repr_len(repr: u32, len: u8) -> Self {
        Self::new(repr, len)
    }
}

impl FromStr for Cidr4 {
    type Err = ParseCidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, len) = parse_cidr::<Ipv4Addr>(s, 32)?;
        Ok(Self::new(addr, len))
    }
}

impl fmt::Display for Cidr4 {
    /// The alternate form (`{:#}`) omits the prefix length.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.addr())
        } else {
            write!(f, "{}/{}", self.addr(), self.len)
        }
    }
}

impl fmt::Debug for Cidr4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<Ipv4Addr> for Cidr4 {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr, 32)
    }
}

impl IntoIterator for Cidr4 {
    type Item = Cidr4;
    type IntoIter = Hosts<Cidr4>;

    fn into_iter(self) -> Hosts<Cidr4> {
        self.hosts()
    }
}

#[cfg(feature = "ipnet")]
impl From<ipnet::Ipv4Net> for Cidr4 {
    fn from(net: ipnet::Ipv4Net) -> Self {
        Self::new(net.addr(), net.prefix_len())
    }
}

#[cfg(feature = "ipnet")]
impl From<Cidr4> for ipnet::Ipv4Net {
    fn from(block: Cidr4) -> Self {
        // the length is within 0..=32 by construction
        ipnet::Ipv4Net::new(block.addr(), block.len).unwrap()
    }
}
