use crate::avl::Link;
use crate::key::Key;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("key {key} lies outside its subtree bounds {low:?}..={high:?}")]
    Ordering {
        key: f64,
        low: Option<f64>,
        high: Option<f64>,
    },
    #[error("node {key} caches height {cached} but its subtree is {actual} high")]
    Height { key: f64, cached: i32, actual: i32 },
    #[error("node {key} has balance factor {balance}")]
    Balance { key: f64, balance: i32 },
}

/// Walks the whole subtree and reports the first broken invariant.
///
/// Equal keys may end up on either side of each other after rotations, so
/// ordering is checked as `left <= node <= right`.
pub fn check(root: &Link) -> Result<(), InvariantViolation> {
    check_subtree(root, None, None).map(|_| ())
}

fn check_subtree(link: &Link, low: Option<Key>, high: Option<Key>) -> Result<i32, InvariantViolation> {
    let Some(node) = link else {
        return Ok(0);
    };

    let below = low.is_some_and(|low| node.key < low);
    let above = high.is_some_and(|high| node.key > high);
    if below || above {
        return Err(InvariantViolation::Ordering {
            key: node.key.get(),
            low: low.map(Key::get),
            high: high.map(Key::get),
        });
    }

    let left = check_subtree(&node.left, low, Some(node.key))?;
    let right = check_subtree(&node.right, Some(node.key), high)?;

    let actual = 1 + left.max(right);
    if node.height != actual {
        return Err(InvariantViolation::Height {
            key: node.key.get(),
            cached: node.height,
            actual,
        });
    }

    let balance = left - right;
    if balance.abs() > 1 {
        return Err(InvariantViolation::Balance {
            key: node.key.get(),
            balance,
        });
    }

    Ok(actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::{Node, Tree};

    fn leaf(value: f64) -> Box<Node> {
        Box::new(Node::new(Key::new(value).unwrap()))
    }

    #[test]
    fn empty_tree_is_valid() {
        assert_eq!(check(&None), Ok(()));
    }

    #[test]
    fn built_tree_is_valid() {
        let tree: Tree = (0..64).map(|i| Key::new(i as f64).unwrap()).collect();
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn detects_misplaced_key() {
        let mut root = leaf(10.0);
        root.left = Some(leaf(12.0));
        root.update_height();
        assert_eq!(
            check(&Some(root)),
            Err(InvariantViolation::Ordering {
                key: 12.0,
                low: None,
                high: Some(10.0),
            })
        );
    }

    #[test]
    fn detects_misplaced_grandchild() {
        let mut root = leaf(10.0);
        let mut left = leaf(5.0);
        left.right = Some(leaf(11.0));
        left.update_height();
        root.left = Some(left);
        root.right = Some(leaf(20.0));
        root.update_height();
        assert!(matches!(
            check(&Some(root)),
            Err(InvariantViolation::Ordering { key, .. }) if key == 11.0
        ));
    }

    #[test]
    fn detects_stale_height() {
        let mut root = leaf(10.0);
        root.right = Some(leaf(20.0));
        assert_eq!(
            check(&Some(root)),
            Err(InvariantViolation::Height {
                key: 10.0,
                cached: 1,
                actual: 2,
            })
        );
    }

    #[test]
    fn detects_unbalanced_chain() {
        let mut middle = leaf(20.0);
        middle.right = Some(leaf(30.0));
        middle.update_height();
        let mut root = leaf(10.0);
        root.right = Some(middle);
        root.update_height();
        assert_eq!(
            check(&Some(root)),
            Err(InvariantViolation::Balance {
                key: 10.0,
                balance: -2,
            })
        );
    }
}
