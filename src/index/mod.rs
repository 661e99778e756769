// =====================================================================
// File: index/mod.rs
// Project: bidtree
// Date: Oct. 2, 2026
//
//! The `index` module contains the binary search tree used for
//! in-memory indexing of bids by their id.
//!
//! Structure:
//! - `node.rs`      : Defines the [`BidNode`] structure and its helpers.
//! - `tree.rs`      : Defines the [`BidTree`] and its algorithms
//!                    (insert, search, remove).
//! - `traversal.rs` : In-order, pre-order and post-order iterators.
//! - `tests.rs`     : Unit tests for the tree (compiled only in test mode).
// =====================================================================

pub mod node;
pub mod traversal;
pub mod tree;

pub use self::node::BidNode;
pub use self::traversal::{InOrder, PostOrder, PreOrder, Traversal, TraversalOrder};
pub use self::tree::BidTree;


/// Misses reported by the index. None of these leave the tree changed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Bid {0} not found.")]
    NotFound(String),
    #[error("Tree is empty")]
    EmptyTree,
    #[error("unknown traversal order '{0}' (expected in, pre or post)")]
    UnknownOrder(String),
}
