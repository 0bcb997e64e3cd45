use crate::avl::{Link, Node};
use std::io::{self, Write};

/// Preorder walk yielding `(key, height)` for every node.
///
/// The walk borrows the tree, so a fresh one can be started at any time.
#[derive(Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a Link) -> Self {
        PreOrder {
            stack: root.as_deref().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (f64, i32);
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // right goes in first so the left subtree is visited first
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some((node.key().get(), node.height()))
    }
}

pub fn traverse_pre_order(root: &Link) -> PreOrder<'_> {
    PreOrder::new(root)
}

/// Writes one `key/height` line per node, in preorder.
pub fn write_preorder<W: Write>(root: &Link, out: &mut W) -> io::Result<()> {
    for (key, height) in traverse_pre_order(root) {
        writeln!(out, "{key:.6}/{height}")?;
    }
    Ok(())
}
