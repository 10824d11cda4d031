//! The nodes of an AVL tree and the recursive algorithms that keep them balanced.
//!
//! Every node exclusively owns its two subtrees. The mutating algorithms here take ownership of a
//! subtree and hand back ownership of its (possibly restructured) replacement, so the caller
//! always reassigns the link it recursed into. Nothing outside this module can get a mutable
//! handle to a [`Node`].

use std::cmp::Ordering;

use tracing::trace;

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single node of the tree. A `Node` stores a key, the height of the subtree rooted at it, and
/// up to two children.
///
/// Nodes are only reachable through shared references (see [`Tree::root`][crate::Tree::root]),
/// which is enough to walk the tree for drawing or inspection.
#[derive(Clone, Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The height of the subtree rooted at this node. Leaves have a height of 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The height of the left subtree minus the height of the right subtree. Positive values
    /// mean the node is left-heavy, negative values mean it is right-heavy. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance_factor(&self) -> isize {
        height(self.left()) as isize - height(self.right()) as isize
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
    }
}

/// Hand assembly of nodes for tests that need shapes `insert` would never produce.
#[cfg(test)]
impl<K> Node<K> {
    pub(crate) fn leaf(key: K) -> Self {
        *Self::new_boxed(key)
    }

    pub(crate) fn with_left(mut self, left: Self) -> Self {
        self.left = Some(Box::new(left));
        self.fix_height();
        self
    }

    pub(crate) fn with_right(mut self, right: Self) -> Self {
        self.right = Some(Box::new(right));
        self.fix_height();
        self
    }

    pub(crate) fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
}

/// The height of a possibly empty subtree. Empty subtrees have a height of 0.
pub(crate) fn height<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |n| n.height)
}

/// The balance factor of a possibly empty subtree. Empty subtrees are balanced.
pub(crate) fn balance_factor<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(0, Node::balance_factor)
}

/// Rotate `y` to the right. This moves the left child up vertically and `y` down vertically and
/// returns the new subtree root. It must only be called when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///        y                  x
///       / \                / \
///      x   z   rotate ->  w   y
///     / \                    / \
///    w   T2                 T2  z
/// ```
fn rotate_right<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let mut x = y.left.take().expect("Rotate right => left child");

    // `y` is now below `x` so its height has to be settled first.
    y.left = x.right.take();
    y.fix_height();

    x.right = Some(y);
    x.fix_height();
    x
}

/// Rotate `x` to the left, the mirror image of [`rotate_right`]. It must only be called when
/// there _is_ a right child.
///
/// ## Panics
///
/// When called on a node without a right child.
fn rotate_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let mut y = x.right.take().expect("Rotate left => right child");

    x.right = y.left.take();
    x.fix_height();

    y.left = Some(x);
    y.fix_height();
    y
}

/// Rotates the left child to the left and then `node` to the right.
fn rotate_left_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let left = node.left.take().expect("Rotate left-right => left child");
    node.left = Some(rotate_left(left));
    rotate_right(node)
}

/// Rotates the right child to the right and then `node` to the left.
fn rotate_right_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let right = node.right.take().expect("Rotate right-left => right child");
    node.right = Some(rotate_right(right));
    rotate_left(node)
}

/// Inserts `key` into the subtree and returns the new subtree root. Inserting a key that is
/// already present leaves the subtree untouched.
pub(crate) fn insert<K>(link: Link<K>, key: K) -> Box<Node<K>>
where
    K: Ord,
{
    let Some(mut node) = link else {
        return Node::new_boxed(key);
    };

    // The key is moved into the subtree by the recursive call, so how it compares with the
    // child it descends into is recorded up front. If this node ends up out of balance, no
    // rotation happened below it and that child is still its direct child.
    let below = match key.cmp(&node.key) {
        Ordering::Less => {
            let below = node.left().map(|left| key.cmp(&left.key));
            node.left = Some(insert(node.left.take(), key));
            below
        }
        Ordering::Greater => {
            let below = node.right().map(|right| key.cmp(&right.key));
            node.right = Some(insert(node.right.take(), key));
            below
        }
        Ordering::Equal => {
            trace!("key already present, insert is a no-op");
            return node;
        }
    };

    node.fix_height();
    let balance = node.balance_factor();

    let node = match below {
        Some(Ordering::Less) if balance > 1 => {
            trace!(case = "LL", "rebalancing after insert");
            rotate_right(node)
        }
        Some(Ordering::Greater) if balance < -1 => {
            trace!(case = "RR", "rebalancing after insert");
            rotate_left(node)
        }
        Some(Ordering::Greater) if balance > 1 => {
            trace!(case = "LR", "rebalancing after insert");
            rotate_left_right(node)
        }
        Some(Ordering::Less) if balance < -1 => {
            trace!(case = "RL", "rebalancing after insert");
            rotate_right_left(node)
        }
        _ => node,
    };

    checked(node)
}

/// Deletes `key` from the subtree and returns the new subtree root, which is `None` once the
/// subtree is empty. Deleting a key that isn't present leaves the subtree untouched.
///
/// A node with two children is never unlinked. Instead it takes over its in-order successor's
/// key and that key is deleted from its right subtree.
pub(crate) fn delete<K>(link: Link<K>, key: &K) -> Link<K>
where
    K: Ord + Clone,
{
    let Some(mut node) = link else {
        trace!("key not found, delete is a no-op");
        return None;
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete(node.left.take(), key),
        Ordering::Greater => node.right = delete(node.right.take(), key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                node.key = min_value_node(&right).key.clone();
                node.left = Some(left);
                node.right = delete(Some(right), &node.key);
            }
            (only_child, None) | (None, only_child) => match only_child {
                Some(child) => node = child,
                None => return None,
            },
        },
    }

    node.fix_height();
    let balance = node.balance_factor();

    let node = if balance > 1 {
        if balance_factor(node.left()) >= 0 {
            trace!(case = "LL", "rebalancing after delete");
            rotate_right(node)
        } else {
            trace!(case = "LR", "rebalancing after delete");
            rotate_left_right(node)
        }
    } else if balance < -1 {
        if balance_factor(node.right()) <= 0 {
            trace!(case = "RR", "rebalancing after delete");
            rotate_left(node)
        } else {
            trace!(case = "RL", "rebalancing after delete");
            rotate_right_left(node)
        }
    } else {
        node
    };

    Some(checked(node))
}

/// Follows left children down to the smallest key of a non-empty subtree.
pub(crate) fn min_value_node<K>(node: &Node<K>) -> &Node<K> {
    let mut current = node;
    while let Some(left) = current.left() {
        current = left;
    }
    current
}

/// Follows right children down to the largest key of a non-empty subtree.
pub(crate) fn max_value_node<K>(node: &Node<K>) -> &Node<K> {
    let mut current = node;
    while let Some(right) = current.right() {
        current = right;
    }
    current
}

/// In debug builds, assert that a freshly rebalanced subtree root has a correct height and
/// satisfies the AVL invariant.
fn checked<K>(node: Box<Node<K>>) -> Box<Node<K>> {
    if cfg!(debug_assertions) {
        let left_height = height(node.left());
        let right_height = height(node.right());
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
    }
    node
}
