//! CIDR blocks for IPv4 and IPv6, and the generic [`Cidr`] trait tying them together.

mod hosts;
mod v4;
mod v6;

pub use hosts::Hosts;
pub use v4::Cidr4;
pub use v6::Cidr6;

use std::net::AddrParseError;
use std::str::FromStr;

use num_traits::{CheckedShr, PrimInt, Unsigned, Zero};
use thiserror::Error;

/// A CIDR block: an address together with a prefix length.
///
/// The address is kept verbatim. Host bits beyond the prefix length are *not* cleared, so
/// `"127.0.0.5/24"` round-trips through [`Display`](std::fmt::Display) unchanged; use [`net`]
/// (or [`mask`]) to obtain the network the block lives in.
///
/// [`net`]: Cidr::net
/// [`mask`]: Cidr::mask
pub trait Cidr: Sized + Copy + Eq {
    /// Integer representation of the address. One of `u32` (IPv4) or `u128` (IPv6).
    type Repr: Unsigned + PrimInt + Zero + CheckedShr;

    /// Raw representation of the address, host bits included.
    fn repr(&self) -> Self::Repr;

    /// Prefix length.
    fn prefix_len(&self) -> u8;

    /// Create a block from a representation and a prefix length. Lengths beyond the address
    /// width are clamped to the width.
    fn from_repr_len(repr: Self::Repr, len: u8) -> Self;

    /// The address width in bits: 32 for IPv4, 128 for IPv6.
    fn width() -> u8 {
        Self::Repr::zero().count_zeros() as u8
    }

    /// The address with all host bits cleared.
    fn mask(&self) -> Self::Repr {
        self.repr() & mask_from_prefix_len(self.prefix_len())
    }

    /// Whether this block is a network: no bit beyond the prefix length is set. Full-length
    /// blocks (`/32`, `/128`) have no host bits and are networks.
    fn is_network(&self) -> bool {
        self.repr() == self.mask()
    }

    /// The network this block lives in: same prefix length, host bits cleared. Idempotent.
    fn net(&self) -> Self {
        Self::from_repr_len(self.mask(), self.prefix_len())
    }

    /// The first address of the block (the network address).
    fn first(&self) -> Self::Repr {
        self.mask()
    }

    /// The last address of the block (all host bits set).
    fn last(&self) -> Self::Repr {
        self.mask() | !mask_from_prefix_len::<Self::Repr>(self.prefix_len())
    }

    /// Whether this block lies within `net`.
    ///
    /// If `net` is not a network, only the exact same block is considered inside it. A block
    /// with a shorter prefix than `net` is never inside it.
    fn is_in(&self, net: &Self) -> bool {
        if !net.is_network() {
            return self.repr() == net.repr() && self.prefix_len() == net.prefix_len();
        }
        if self.prefix_len() < net.prefix_len() {
            return false;
        }
        has_prefix(self.repr(), net.repr(), net.prefix_len())
    }

    /// Check if a specific address bit is set, counted from the left (bit 0 is the most
    /// significant). Host bits count too.
    fn is_bit_set(&self, bit: u8) -> bool {
        bit_is_set(self.repr(), bit)
    }

    /// Whether the first `len` bits of this block's address agree with `prefix`.
    fn has_prefix(&self, prefix: Self::Repr, len: u8) -> bool {
        has_prefix(self.repr(), prefix, len)
    }

    /// Binary rendering for diagnostics: the bits covered by the prefix length are enclosed in
    /// `[` and `]`, with a `'` separator every eight bits.
    ///
    /// ```
    /// use lpfst::{Cidr, Cidr4};
    /// let block: Cidr4 = "192.168.0.0/16".parse().unwrap();
    /// assert_eq!(block.bit_string(), "[11000000'10101000]'00000000'00000000");
    /// ```
    fn bit_string(&self) -> String {
        let width = Self::width();
        let mask = self.prefix_len();
        let mut out = String::with_capacity(2 * width as usize);
        out.push('[');
        for i in 0..width {
            if i == mask {
                out.push(']');
            }
            if i > 0 && i % 8 == 0 {
                out.push('\'');
            }
            out.push(if self.is_bit_set(i) { '1' } else { '0' });
        }
        if mask == width {
            out.push(']');
        }
        out
    }
}

/// Error returned by the strict `FromStr` implementations of [`Cidr4`] and [`Cidr6`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCidrError {
    /// The address part is not a valid address of the expected family.
    #[error("invalid address: {0}")]
    Addr(#[from] AddrParseError),
    /// The part after `/` is not an unsigned integer.
    #[error("invalid prefix length `{0}`")]
    PrefixLen(String),
    /// The prefix length exceeds the address width.
    #[error("prefix length {len} exceeds the {width}-bit address width")]
    PrefixLenRange {
        /// The rejected prefix length.
        len: u8,
        /// The address width of the family being parsed.
        width: u8,
    },
}

pub(crate) fn mask_from_prefix_len<R>(len: u8) -> R
where
    R: PrimInt + Zero,
{
    if len as u32 >= R::zero().count_zeros() {
        !R::zero()
    } else if len == 0 {
        R::zero()
    } else {
        !((!R::zero()) >> len as usize)
    }
}

pub(crate) fn bit_is_set<R>(repr: R, bit: u8) -> bool
where
    R: PrimInt + Zero + CheckedShr,
{
    let mask = (!R::zero()).checked_shr(bit as u32).unwrap_or_else(R::zero)
        ^ (!R::zero())
            .checked_shr(1u32 + bit as u32)
            .unwrap_or_else(R::zero);
    mask & repr != R::zero()
}

pub(crate) fn has_prefix<R>(repr: R, prefix: R, len: u8) -> bool
where
    R: PrimInt + Zero,
{
    (repr ^ prefix) & mask_from_prefix_len::<R>(len) == R::zero()
}

/// Split `"addr/len"`, parse both parts strictly. A missing `/len` means a host block (`/width`).
pub(crate) fn parse_cidr<A>(s: &str, width: u8) -> Result<(A, u8), ParseCidrError>
where
    A: FromStr<Err = AddrParseError>,
{
    match s.split_once('/') {
        None => Ok((s.parse()?, width)),
        Some((addr, len)) => {
            let addr = addr.parse()?;
            let len: u8 = len
                .parse()
                .map_err(|_| ParseCidrError::PrefixLen(len.to_string()))?;
            if len > width {
                return Err(ParseCidrError::PrefixLenRange { len, width });
            }
            Ok((addr, len))
        }
    }
}
