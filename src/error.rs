//! Errors reported by [`Tree::validate`][crate::Tree::validate].

use thiserror::Error;

/// A broken tree invariant. `position` is the in-order index of the offending node, i.e. the
/// number of keys that sort before it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// A key is not strictly greater than the key visited before it.
    #[error("key at position {position} is out of order")]
    Unordered {
        /// In-order index of the node.
        position: usize,
    },

    /// A node's stored height disagrees with the heights of its children.
    #[error("node at position {position} stores height {stored} but its subtree has height {computed}")]
    HeightMismatch {
        /// In-order index of the node.
        position: usize,
        /// The height kept in the node.
        stored: usize,
        /// `1 + max(left height, right height)`.
        computed: usize,
    },

    /// A node's children differ in height by more than one.
    #[error("node at position {position} has balance factor {balance}")]
    Unbalanced {
        /// In-order index of the node.
        position: usize,
        /// Left height minus right height.
        balance: isize,
    },
}
