// =====================================================================
// File: index/node.rs
// Project: bidtree
// Date: Oct. 2, 2026
//
// Description:
//   Defines the binary search tree node (`BidNode`) used by the
//   in-memory bid index. Each node maintains:
//
//   - `bid`  : The record this node holds (its key is `bid.bid_id`).
//   - `left` : Subtree of keys strictly less than this node's key.
//   - `right`: Subtree of keys greater than or equal to this node's key.
//
// Notes:
//   * A node exclusively owns its children. There are no parent links,
//     so structural changes are made by rebinding child slots.
//   * Higher-level operations (insert, search, remove) are implemented
//     in `tree.rs`.
// =====================================================================
use crate::Bid;


/// Child slot: either a boxed subtree or nothing.
pub type Link = Option<Box<BidNode>>;


/// Basic binary search tree node holding one bid.
#[derive(Debug)]
pub struct BidNode {
    pub bid: Bid,
    /// Box keeps the recursive type sized - children live on the heap
    pub left: Link,
    pub right: Link,
}


impl BidNode {
    /// Creates a new leaf holding `bid`.
    ///
    /// # Example
    /// ```
    /// use bidtree::{Bid, BidNode};
    /// let leaf = BidNode::new(Bid::new("1", "chair", "fund", 5.0));
    /// assert!(leaf.is_leaf());
    /// ```
    pub fn new(bid: Bid) -> Self {
        Self {
            bid,
            left: None,
            right: None,
        }
    }

    /// Key of the record held by this node.
    pub fn key(&self) -> &str {
        &self.bid.bid_id
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Picks the child slot a key descends into.
    ///
    /// Strictly-less keys go left. Everything else, equal keys included,
    /// goes right.
    pub fn child_for(&self, key: &str) -> &Link {
        if key < self.key() { &self.left } else { &self.right }
    }

    /// Mutable form of [`child_for`](Self::child_for).
    pub fn child_for_mut(&mut self, key: &str) -> &mut Link {
        if key < self.bid.bid_id.as_str() {
            &mut self.left
        } else {
            &mut self.right
        }
    }
}
