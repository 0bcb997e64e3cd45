use crate::invariants::{self, InvariantViolation};
use crate::key::Key;
use crate::preorder::PreOrder;
use crate::tree::TreeOps;
use log::trace;
use std::cmp::Ordering;
use std::fmt;

/// An owning AVL tree over floating point keys.
///
/// Keys that compare equal are all kept; a repeated key is routed to the
/// right subtree of its twin on the way down.
#[derive(Clone, Default)]
pub struct Tree {
    root: Link,
    len: usize,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) key: Key,
    pub(crate) height: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

pub type Link = Option<Box<Node>>;

/// In-order iterator over the keys of a tree.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl TreeOps for Tree {
    fn insert(&mut self, key: Key) {
        self.root = Some(insert(self.root.take(), key));
        self.len += 1;
    }

    fn contains(&self, key: &Key) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> i32 {
        height(&self.root)
    }
}

impl Tree {
    pub fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> &Link {
        &self.root
    }

    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    pub fn preorder(&self) -> PreOrder<'_> {
        PreOrder::new(&self.root)
    }

    pub fn validate(&self) -> Result<(), InvariantViolation> {
        invariants::check(&self.root)
    }
}

impl Node {
    pub fn new(key: Key) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Positive when left-heavy, negative when right-heavy.
    pub fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

/// Height of a subtree, 0 when empty.
pub fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

pub fn balance_factor(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

/*
          y                           x
         / \     rotate_right        / \
        x   t3   ----------->      t1   y
       / \       <-----------          / \
      t1  t2     rotate_left          t2  t3
*/

pub fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let mut x = y.left.take().expect("right rotation needs a left child");
    y.left = x.right.take();
    // y is below x now, so its height goes first
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

pub fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let mut y = x.right.take().expect("left rotation needs a right child");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Inserts `key` below `link` and returns the root of the rebalanced subtree.
///
/// The returned node replaces whatever `link` held: a rotation on the way
/// back up may have promoted a different node to the top.
pub fn insert(link: Link, key: Key) -> Box<Node> {
    let Some(mut node) = link else {
        return Box::new(Node::new(key));
    };

    if key < node.key {
        node.left = Some(insert(node.left.take(), key));
    } else {
        node.right = Some(insert(node.right.take(), key));
    }

    node.update_height();
    let balance = node.balance_factor();

    // Only one child grew, and the new key tells us which grandchild it went to.
    if balance > 1 {
        let left = node.left.take().expect("left-heavy node should have a left child");
        if key < left.key {
            trace!("left-left case at {}", node.key);
            node.left = Some(left);
        } else {
            trace!("left-right case at {}", node.key);
            node.left = Some(rotate_left(left));
        }
        return rotate_right(node);
    }

    if balance < -1 {
        let right = node.right.take().expect("right-heavy node should have a right child");
        if key >= right.key {
            trace!("right-right case at {}", node.key);
            node.right = Some(right);
        } else {
            trace!("right-left case at {}", node.key);
            node.right = Some(rotate_right(right));
        }
        return rotate_left(node);
    }

    node
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut cur: Option<&'a Node>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Key;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.key)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Key> for Tree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Key> for Tree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}
