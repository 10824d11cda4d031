//! This crate exposes an AVL tree: a self-balancing Binary Search Tree (BST) of unique keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored keys. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a key and may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its
//!    own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than its
//!    own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`).
//!
//! ## AVL Tree
//!
//! An AVL tree additionally keeps the heights of the two subtrees of every `Node` within one of
//! each other. After each insert or delete, the nodes along the modified path recompute their
//! heights and any node that fell out of balance is restored with one or two rotations. This
//! bounds the height by roughly `1.44 lg N`, so every operation is `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [20, 10, 30, 5, 15] {
//!     tree = tree.insert(key);
//! }
//!
//! // 20 has two children so it takes over its successor's key, 30.
//! let tree = tree.delete(&20);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 10, 15, 30]);
//! assert_eq!(tree.validate(), Ok(()));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod node;
pub mod tree;

pub use error::InvariantError;
pub use iter::Iter;
pub use node::Node;
pub use tree::Tree;

#[cfg(test)]
mod test;
