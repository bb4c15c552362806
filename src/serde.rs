//! Serialization and deserialization.
//!
//! CIDR blocks serialize as their display string and deserialize through the strict parser.
//! Trees serialize as the sequence of `(block, payload)` pairs and rebuild through
//! `FromIterator` on deserialization.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Cidr, Cidr4, Cidr6, Lpfst};

impl Serialize for Cidr4 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr4 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

impl Serialize for Cidr6 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr6 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

impl<C, T> Serialize for Lpfst<C, T>
where
    C: Cidr + Serialize,
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, C, T> Deserialize<'de> for Lpfst<C, T>
where
    C: Cidr + Deserialize<'de>,
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<(C, T)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use crate::{Cidr4, Lpfst4};

    #[test]
    fn cidr_as_string() {
        let block = Cidr4::parse_lossy("10.0.0.0/8");
        assert_eq!(serde_json::to_string(&block).unwrap(), "\"10.0.0.0/8\"");
        assert_eq!(
            serde_json::from_str::<Cidr4>("\"10.0.0.0/8\"").unwrap(),
            block
        );
        assert!(serde_json::from_str::<Cidr4>("\"10.0.0.0/64\"").is_err());
    }

    #[test]
    fn tree_roundtrip() {
        let mut tree: Lpfst4<u32> = Lpfst4::new();
        tree.insert(Cidr4::parse_lossy("10.0.0.0/8"), 1);
        tree.insert(Cidr4::parse_lossy("192.168.3.0/24"), 2);
        tree.insert(Cidr4::parse_lossy("10.0.2.128/25"), 3);
        let json = serde_json::to_string(&tree).unwrap();
        let back: Lpfst4<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 3);
        assert_eq!(back.lookup_addr(0x0a000001u32), Some(&1));
        assert_eq!(back.lookup_addr(0xc0a80301u32), Some(&2));
        assert_eq!(back.lookup_addr(0x0a000281u32), Some(&3));
    }
}
