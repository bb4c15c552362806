//! Address enumeration for CIDR blocks.

use num_traits::One;

use super::Cidr;

/// Iterator over the addresses of a block, created by [`Cidr4::hosts`](crate::Cidr4::hosts) and
/// [`Cidr6::hosts`](crate::Cidr6::hosts).
///
/// For a network block smaller than the full address width, this yields every address from
/// `first() + 1` to `last()` (the network address itself is skipped). For any other block (a
/// block with host bits, or a full-length `/W` block) it yields the block itself, once. All
/// items keep the prefix length of the originating block.
///
/// ```
/// use lpfst::Cidr4;
/// let hosts: Vec<String> = Cidr4::parse_lossy("192.168.10.0/30")
///     .hosts()
///     .map(|b| b.to_string())
///     .collect();
/// assert_eq!(hosts, ["192.168.10.1/30", "192.168.10.2/30", "192.168.10.3/30"]);
///
/// let hosts: Vec<String> = Cidr4::parse_lossy("10.0.0.1/8")
///     .hosts()
///     .map(|b| b.to_string())
///     .collect();
/// assert_eq!(hosts, ["10.0.0.1/8"]);
/// ```
#[derive(Clone)]
pub struct Hosts<C: Cidr> {
    cur: Option<C::Repr>,
    last: C::Repr,
    len: u8,
}

impl<C: Cidr> Hosts<C> {
    pub(crate) fn new(block: &C) -> Self {
        let len = block.prefix_len();
        if block.is_network() && len < C::width() {
            Self {
                cur: Some(block.first() + C::Repr::one()),
                last: block.last(),
                len,
            }
        } else {
            Self {
                cur: Some(block.repr()),
                last: block.repr(),
                len,
            }
        }
    }
}

impl<C: Cidr> Iterator for Hosts<C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        let cur = self.cur?;
        self.cur = if cur == self.last {
            None
        } else {
            Some(cur + C::Repr::one())
        };
        Some(C::from_repr_len(cur, self.len))
    }
}
