//! Diagnostic rendering of the tree shape.

use std::fmt;

use super::{Lpfst, Node};
use crate::cidr::Cidr;

/// Renders one node per line: the root on the first line, then every child prefixed with its
/// depth, an indent, and `[-]` (left) or `[+]` (right). Entries appear with their effective
/// prefix length.
impl<C, T> fmt::Debug for Lpfst<C, T>
where
    C: Cidr + fmt::Display,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => f.write_str("(empty)"),
            Some(root) => {
                write!(
                    f,
                    "{} {:?}",
                    C::from_repr_len(root.prefix, root.len),
                    root.value
                )?;
                fmt_children::<C, T>(root, 1, f)
            }
        }
    }
}

fn fmt_children<C, T>(node: &Node<C::Repr, T>, level: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    C: Cidr + fmt::Display,
    T: fmt::Debug,
{
    if let Some(left) = node.left.as_deref() {
        write!(
            f,
            "\n{}{:indent$}[-] {} {:?}",
            level,
            "",
            C::from_repr_len(left.prefix, left.len),
            left.value,
            indent = 2 * level,
        )?;
        fmt_children::<C, T>(left, level + 1, f)?;
    }
    if let Some(right) = node.right.as_deref() {
        write!(
            f,
            "\n{}{:indent$}[+] {} {:?}",
            level,
            "",
            C::from_repr_len(right.prefix, right.len),
            right.value,
            indent = 2 * level,
        )?;
        fmt_children::<C, T>(right, level + 1, f)?;
    }
    Ok(())
}
