//! Iterators over the tree.

use super::{Lpfst, Node};
use crate::cidr::Cidr;

/// Iterator over references to all entries, in preorder (a node before its children, left
/// before right). Created by [`Lpfst::iter`].
///
/// Entries reappear as stored: a non-network block inserted into the tree comes back with the
/// full address width as its prefix length.
#[derive(Clone)]
pub struct Iter<'a, C: Cidr, T> {
    stack: Vec<&'a Node<C::Repr, T>>,
}

impl<'a, C: Cidr, T> Iterator for Iter<'a, C, T> {
    type Item = (C, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some((C::from_repr_len(node.prefix, node.len), &node.value))
    }
}

/// Owning iterator over all entries, in preorder. Created by the [`IntoIterator`]
/// implementation of [`Lpfst`].
pub struct IntoIter<C: Cidr, T> {
    stack: Vec<Box<Node<C::Repr, T>>>,
}

impl<C: Cidr, T> Iterator for IntoIter<C, T> {
    type Item = (C, T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = *self.stack.pop()?;
        let Node {
            len,
            prefix,
            value,
            left,
            right,
        } = node;
        if let Some(right) = right {
            self.stack.push(right);
        }
        if let Some(left) = left {
            self.stack.push(left);
        }
        Some((C::from_repr_len(prefix, len), value))
    }
}

impl<C: Cidr, T> Lpfst<C, T> {
    /// Iterate over all entries as `(block, &payload)` pairs, in preorder.
    ///
    /// ```
    /// use lpfst::{Cidr4, Lpfst4};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut tree: Lpfst4<&str> = Lpfst4::new();
    /// tree.insert("10.0.0.0/8".parse()?, "a");
    /// tree.insert("10.0.2.0/24".parse()?, "b");
    /// let mut entries: Vec<_> = tree.iter().collect();
    /// entries.sort();
    /// assert_eq!(entries, vec![
    ///     ("10.0.0.0/8".parse()?, &"a"),
    ///     ("10.0.2.0/24".parse()?, &"b"),
    /// ]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn iter(&self) -> Iter<'_, C, T> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }
}

impl<'a, C: Cidr, T> IntoIterator for &'a Lpfst<C, T> {
    type Item = (C, &'a T);
    type IntoIter = Iter<'a, C, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: Cidr, T> IntoIterator for Lpfst<C, T> {
    type Item = (C, T);
    type IntoIter = IntoIter<C, T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            stack: self.root.into_iter().collect(),
        }
    }
}
