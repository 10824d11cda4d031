//! A self-balancing BST (specifically, an AVL tree) of unique keys.
//!
//! Operations that change the tree take it by value and return the updated tree, because a
//! rotation can replace the root node. Always keep the tree that comes back.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // Inserting ascending keys rotates the middle one up to the root.
//! let tree = tree.insert(10).insert(20).insert(30);
//! assert_eq!(tree.root().map(|root| *root.key()), Some(20));
//! assert_eq!(tree.height(), 2);
//!
//! // Inserting a key that is already present changes nothing.
//! let tree = tree.insert(20);
//! assert_eq!(tree.len(), 3);
//!
//! // And delete one for good measure.
//! let tree = tree.delete(&10);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [20, 30]);
//! ```

use std::fmt;

use crate::error::InvariantError;
use crate::iter::Iter;
use crate::node::{self, Link, Node};

/// An AVL tree holding unique keys. This can be used for inserting, finding, and deleting keys
/// in `O(lg N)` time.
#[derive(Clone)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns the tree with `key` added to it. If the tree already contains `key` the tree is
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::new().insert(30).insert(10).insert(20);
    ///
    /// // 30 -> 10 -> 20 is rebalanced with 20 on top.
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(20));
    /// assert!(tree.contains(&10));
    /// ```
    #[must_use = "the tree is moved into `insert`; use the returned tree"]
    pub fn insert(self, key: K) -> Self
    where
        K: Ord,
    {
        Self {
            root: Some(node::insert(self.root, key)),
        }
    }

    /// Returns the tree without `key`. If the tree never contained `key` it is returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::new().insert(1).insert(2);
    /// let tree = tree.delete(&1);
    ///
    /// assert!(!tree.contains(&1));
    /// assert!(tree.delete(&2).is_empty());
    /// ```
    #[must_use = "the tree is moved into `delete`; use the returned tree"]
    pub fn delete(self, key: &K) -> Self
    where
        K: Ord + Clone,
    {
        Self {
            root: node::delete(self.root, key),
        }
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// The root node, if the tree isn't empty. Walking the tree from here is read-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(3);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.key(), &2);
    /// assert_eq!(root.left().map(|n| *n.key()), Some(1));
    /// assert_eq!(root.right().map(|n| *n.key()), Some(3));
    /// ```
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the keys in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The height of the tree. An empty tree has height 0 and a single key has height 1.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(node.key()) {
                std::cmp::Ordering::Less => node.left(),
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| node::min_value_node(root).key())
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|root| node::max_value_node(root).key())
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }

    /// Checks ordering, stored heights, and balance at every node, reporting the first
    /// violation found in in-order position.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = (0..100).collect();
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantError>
    where
        K: Ord,
    {
        let mut position = 0;
        let mut previous = None;
        validate_subtree(self.root(), &mut position, &mut previous).map(|_| ())
    }
}

/// Validates the subtree rooted at `node` and returns its height. `position` counts the nodes
/// visited so far and `previous` is the last key visited.
fn validate_subtree<'a, K>(
    node: Option<&'a Node<K>>,
    position: &mut usize,
    previous: &mut Option<&'a K>,
) -> Result<usize, InvariantError>
where
    K: Ord,
{
    let Some(node) = node else {
        return Ok(0);
    };

    let left_height = validate_subtree(node.left(), position, previous)?;

    let here = *position;
    if let Some(previous) = *previous {
        if previous >= node.key() {
            return Err(InvariantError::Unordered { position: here });
        }
    }
    *previous = Some(node.key());
    *position += 1;

    let right_height = validate_subtree(node.right(), position, previous)?;

    let computed = 1 + left_height.max(right_height);
    if node.height() != computed {
        return Err(InvariantError::HeightMismatch {
            position: here,
            stored: node.height(),
            computed,
        });
    }

    let balance = left_height as isize - right_height as isize;
    if balance.abs() > 1 {
        return Err(InvariantError::Unbalanced {
            position: here,
            balance,
        });
    }

    Ok(computed)
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

/// Two trees are equal when they hold the same keys, whatever their shape.
impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        let tree = std::mem::take(self);
        *self = iter.into_iter().fold(tree, Self::insert);
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
