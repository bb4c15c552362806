//! Tables of well-known non-routable networks.
//!
//! Each function builds a fresh tree mapping the reserved blocks of its address family to the
//! RFC that reserves them. Useful as a blocklist seed for address validation.

use crate::{Cidr4, Cidr6, Lpfst4, Lpfst6};

/// Non-routable IPv4 networks, mapped to the reserving RFC.
///
/// ```
/// let reserved = lpfst::reserved::ipv4_reserved();
/// assert_eq!(reserved.lookup_addr(0x0a000001u32), Some(&"RFC-1918: Private-Use"));
/// assert!(!reserved.check_addr(0x08080808u32));
/// ```
pub fn ipv4_reserved() -> Lpfst4<&'static str> {
    [
        ("0.0.0.0/8", "RFC-1122: This host on this network"),
        ("10.0.0.0/8", "RFC-1918: Private-Use"),
        ("100.64.0.0/10", "RFC-6598: Shared Address Space"),
        ("127.0.0.0/8", "RFC-1122: Loopback"),
        ("169.254.0.0/16", "RFC-3927: Link Local"),
        ("172.16.0.0/12", "RFC-1918: Private-Use"),
        ("192.0.0.0/24", "RFC-6890: IETF Protocol Assignments"),
        ("192.0.2.0/24", "RFC-5737: Documentation (TEST-NET-1)"),
        ("192.88.99.0/24", "RFC-3068: 6to4 Relay Anycast"),
        ("192.168.0.0/16", "RFC-1918: Private-Use"),
        ("198.18.0.0/15", "RFC-2544: Benchmarking"),
        ("198.51.100.0/24", "RFC-5737: Documentation (TEST-NET-2)"),
        ("203.0.113.0/24", "RFC-5737: Documentation (TEST-NET-3)"),
        ("224.0.0.0/3", "RFC-5771, RFC-1112: Multicast and Reserved"),
    ]
    .into_iter()
    .map(|(block, rfc)| (Cidr4::parse_lossy(block), rfc))
    .collect()
}

/// Non-routable IPv6 networks, mapped to the reserving RFC.
///
/// ```
/// use std::net::Ipv6Addr;
/// let reserved = lpfst::reserved::ipv6_reserved();
/// let ula: Ipv6Addr = "fd12::1".parse().unwrap();
/// assert_eq!(reserved.lookup_addr(ula), Some(&"RFC-4193: Unique-Local"));
/// ```
pub fn ipv6_reserved() -> Lpfst6<&'static str> {
    [
        ("::/128", "RFC-4291: Unspecified Address"),
        ("::1/128", "RFC-4291: Loopback"),
        ("2001:db8::/32", "RFC-3849: Documentation"),
        ("fc00::/7", "RFC-4193: Unique-Local"),
        ("fe80::/10", "RFC-4291: Link-Local"),
        ("ff00::/8", "RFC-4291: Multicast"),
    ]
    .into_iter()
    .map(|(block, rfc)| (Cidr6::parse_lossy(block), rfc))
    .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Match;

    #[test]
    fn v4_walk() {
        let reserved = ipv4_reserved();
        assert_eq!(reserved.len(), 14);
        assert_eq!(
            reserved.lookup_addr(0xc0a80a01u32), // 192.168.10.1
            Some(&"RFC-1918: Private-Use")
        );
        assert_eq!(
            reserved.lookup_addr(0x7f000001u32), // 127.0.0.1
            Some(&"RFC-1122: Loopback")
        );
        assert_eq!(
            reserved.lookup_addr(0x647fffffu32), // 100.127.255.255
            Some(&"RFC-6598: Shared Address Space")
        );
        assert_eq!(
            reserved.lookup_addr(0xc6130001u32), // 198.19.0.1
            Some(&"RFC-2544: Benchmarking")
        );
        assert_eq!(
            reserved.lookup_addr(0xe0000001u32), // 224.0.0.1
            Some(&"RFC-5771, RFC-1112: Multicast and Reserved")
        );
        assert!(!reserved.check_addr(0x08080808u32)); // 8.8.8.8
        assert!(!reserved.check_addr(0x01010101u32)); // 1.1.1.1
    }

    #[test]
    fn v4_network_queries() {
        let reserved = ipv4_reserved();
        assert_eq!(
            reserved.lookup(&Cidr4::parse_lossy("10.11.0.0/16")),
            Some(Match::Covered(&"RFC-1918: Private-Use"))
        );
        // the walk descends past depth 2 along the zero path, outgrowing the query
        assert_eq!(
            reserved.lookup(&Cidr4::parse_lossy("0.0.0.0/2")),
            Some(Match::Encloses)
        );
        assert_eq!(reserved.lookup(&Cidr4::parse_lossy("8.0.0.0/6")), None);
        assert_eq!(reserved.lookup(&Cidr4::parse_lossy("8.8.8.0/24")), None);
    }

    #[test]
    fn v6_walk() {
        let reserved = ipv6_reserved();
        assert_eq!(reserved.len(), 6);
        assert_eq!(reserved.lookup_addr(1u128), Some(&"RFC-4291: Loopback"));
        assert_eq!(reserved.lookup_addr(0u128), Some(&"RFC-4291: Unspecified Address"));
        assert_eq!(
            reserved.lookup_addr(0xfd12u128 << 112),
            Some(&"RFC-4193: Unique-Local")
        );
        assert_eq!(
            reserved.lookup_addr(0x20010db8u128 << 96 | 5),
            Some(&"RFC-3849: Documentation")
        );
        assert!(!reserved.check_addr(0x20010db9u128 << 96));
    }
}
