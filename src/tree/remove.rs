//! Treap deletion.

use std::mem;

use super::{entry_len, Lpfst, Node};
use crate::cidr::{bit_is_set, Cidr};

impl<C: Cidr, T> Lpfst<C, T> {
    /// Remove a block, returning its payload.
    ///
    /// The block must match a stored entry exactly (same effective length, same prefix bits).
    /// If no entry matches, the tree is left untouched and `None` is returned.
    ///
    /// ```
    /// use lpfst::{Cidr4, Lpfst4};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut tree: Lpfst4<u32> = Lpfst4::new();
    /// tree.insert("192.168.1.0/24".parse()?, 1);
    /// tree.insert("192.168.0.0/16".parse()?, 2);
    /// assert_eq!(tree.remove(&"192.168.1.0/24".parse()?), Some(1));
    /// assert_eq!(tree.remove(&"192.168.1.0/24".parse()?), None);
    /// assert_eq!(tree.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn remove(&mut self, block: &C) -> Option<T> {
        let removed = Self::remove_in(&mut self.root, entry_len(block), block.repr(), 0);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_in(
        slot: &mut Option<Box<Node<C::Repr, T>>>,
        len: u8,
        prefix: C::Repr,
        level: u8,
    ) -> Option<T> {
        {
            let cur = match slot.as_deref_mut() {
                Some(cur) => cur,
                None => return None,
            };
            if cur.len != len || cur.prefix != prefix {
                if len == level {
                    return None;
                }
                let child = if bit_is_set(prefix, level) {
                    &mut cur.right
                } else {
                    &mut cur.left
                };
                return Self::remove_in(child, len, prefix, level + 1);
            }
        }
        Self::merge_out(slot)
    }

    /// Delete the node in `slot`: a leaf is detached, otherwise the child with the greater
    /// effective length is promoted into the slot (field swap) and the doomed entry is chased
    /// down until it becomes a leaf.
    fn merge_out(slot: &mut Option<Box<Node<C::Repr, T>>>) -> Option<T> {
        let mut node = slot.take()?;
        let promote_left = match (node.left.as_deref(), node.right.as_deref()) {
            (None, None) => return Some(node.value),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(left), Some(right)) => left.len > right.len,
        };
        let child_slot = if promote_left {
            &mut node.left
        } else {
            &mut node.right
        };
        if let Some(child) = child_slot.as_deref_mut() {
            mem::swap(&mut node.len, &mut child.len);
            mem::swap(&mut node.prefix, &mut child.prefix);
            mem::swap(&mut node.value, &mut child.value);
        }
        let value = Self::merge_out(child_slot);
        *slot = Some(node);
        value
    }
}
