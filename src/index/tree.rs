// =====================================================================
// File: index/tree.rs
// Project: bidtree
// Date: Oct. 2, 2026 - Refactored Oct. 9, 2026
//
// Description:
//   Implements the unbalanced binary search tree (`BidTree`) that
//   manages insertion, search, and removal over `BidNode` structures.
//   This index is the in-memory structure backing the bid shell.
//
// Features:
//   - `insert`: Adds a bid as a new leaf. Equal keys descend right and
//               are kept as shadowed duplicates (no overwrite).
//   - `search`: Returns the first bid on the search path with the key.
//   - `remove`: Splices out a node, using the in-order successor when
//               the node has two children.
//   - Traversals: in-order, pre-order and post-order (see traversal.rs).
//
// Notes:
//   * The tree is never rebalanced. Sorted input builds a chain, so
//     every walk (removal included) is iterative.
//   * Removal walks to the matching child slot, splices the node out,
//     and rebinds the slot to the new subtree root. No parent links.
// =====================================================================
use tracing::debug;

use super::node::Link;
use super::traversal::{InOrder, PostOrder, PreOrder, Traversal, TraversalOrder};
use super::{BidNode, IndexError};
use crate::Bid;


/// Bid index - owns the optional root node and a running record count.
#[derive(Debug, Default)]
pub struct BidTree {
    root: Link,
    len: usize,
}


impl BidTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Wraps an already built subtree as a tree.
    ///
    /// The node count is taken by walking the subtree. The caller is
    /// trusted to have placed keys by the less/else rule.
    pub fn from_root(root: BidNode) -> Self {
        let mut tree = Self { root: Some(Box::new(root)), len: 0 };
        tree.len = tree.count_nodes();
        tree
    }

    /// Root node, `None` when the tree is empty.
    pub fn root(&self) -> Option<&BidNode> {
        self.root.as_deref()
    }

    /// Number of bids held, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a bid into the tree.
    ///
    /// - If the tree is empty, the bid becomes the root.
    /// - Otherwise descend from the root: strictly-less keys go left,
    ///   everything else goes right, and the bid lands in the first
    ///   empty child slot.
    /// - A key equal to an existing key is *not* merged. It is placed in
    ///   the right subtree of the existing node.
    ///
    /// # Example
    /// ```
    /// use bidtree::{Bid, BidTree};
    ///
    /// let mut tree = BidTree::new();
    /// tree.insert(Bid::new("98109", "Desk", "General", 10.0));
    /// tree.insert(Bid::new("98108", "Lamp", "General", 4.0));
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.search("98108").map(|b| b.title.as_str()), Some("Lamp"));
    /// ```
    pub fn insert(&mut self, bid: Bid) {
        // Walk child slots until an empty one turns up
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = node.child_for_mut(&bid.bid_id);
        }
        *slot = Some(Box::new(BidNode::new(bid)));
        self.len += 1;
    }

    /// Search for a bid by key.
    ///
    /// Descends from the root with the same less/else rule as `insert`
    /// and stops at the first node whose key is equal.
    ///
    /// # Returns
    /// * `Some(&Bid)` for the first match on the search path.
    /// * `None` if descent falls off the tree.
    ///
    /// # Example
    /// ```
    /// use bidtree::{Bid, BidTree};
    /// let mut tree = BidTree::new();
    /// tree.insert(Bid::new("50", "Chair", "General", 1.0));
    /// assert!(tree.search("50").is_some());
    /// assert!(tree.search("99999").is_none());
    /// ```
    pub fn search(&self, key: &str) -> Option<&Bid> {
        let mut current_node = self.root.as_deref();
        while let Some(node) = current_node {
            if node.key() == key {
                return Some(&node.bid);
            }
            current_node = node.child_for(key).as_deref();
        }
        None
    }

    /// Removes the first bid on the search path with this key.
    ///
    /// - Leaf: the node is detached.
    /// - One child: the child takes the node's place.
    /// - Two children: the in-order successor (leftmost node of the right
    ///   subtree) is detached and its bid moves into this node.
    ///
    /// # Returns
    /// The removed bid, or `IndexError::NotFound` when the key is absent
    /// (the empty tree included). A miss leaves the tree unchanged.
    ///
    /// # Example
    /// ```
    /// use bidtree::{Bid, BidTree};
    /// let mut tree = BidTree::new();
    /// tree.insert(Bid::new("dog", "Bark", "General", 2.0));
    /// assert!(tree.remove("dog").is_ok());
    /// assert!(tree.search("dog").is_none());
    /// assert!(tree.remove("dog").is_err());
    /// ```
    pub fn remove(&mut self, key: &str) -> Result<Bid, IndexError> {
        // Walk down to the slot holding the first match, like `insert`
        let mut slot = &mut self.root;
        while slot.as_deref().is_some_and(|node| node.key() != key) {
            if let Some(node) = slot {
                slot = node.child_for_mut(key);
            }
        }

        let Some(node) = slot.take() else {
            return Err(IndexError::NotFound(key.to_string()));
        };

        // The slot is rebound to whatever now roots that subtree
        let (new_root, bid) = Self::splice_out(node);
        *slot = new_root;
        self.len -= 1;
        Ok(bid)
    }

    /// Drops every node, leaving an empty tree.
    ///
    /// Nodes are released from an explicit work list so a long chain
    /// does not recurse through nested `Box` drops.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<BidNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Nodes on the longest root-to-leaf path, 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut pending: Vec<(&BidNode, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = pending.pop() {
            tallest = tallest.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }
        tallest
    }

    /// Checks the ordering invariant over every node.
    ///
    /// Left subtrees must hold keys strictly less than their parent, and
    /// right subtrees keys greater than or equal to it.
    pub fn is_ordered(&self) -> bool {
        // (node, inclusive lower bound, exclusive upper bound)
        let mut pending: Vec<(&BidNode, Option<&str>, Option<&str>)> = self
            .root
            .as_deref()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();

        while let Some((node, lower, upper)) = pending.pop() {
            let key = node.key();
            if lower.is_some_and(|low| key < low) || upper.is_some_and(|high| key >= high) {
                return false;
            }
            if let Some(left) = node.left.as_deref() {
                pending.push((left, lower, Some(key)));
            }
            if let Some(right) = node.right.as_deref() {
                pending.push((right, Some(key), upper));
            }
        }
        true
    }


    // =========================
    // Traversals
    // =========================

    /// Ascending key order: left subtree, node, right subtree.
    ///
    /// Returns `IndexError::EmptyTree` instead of an empty iterator so
    /// callers can report the empty state.
    ///
    /// # Example
    /// ```
    /// use bidtree::{Bid, BidTree};
    /// let mut tree = BidTree::new();
    /// for id in ["98109", "98110", "98108"] {
    ///     tree.insert(Bid::new(id, "", "", 0.0));
    /// }
    /// let ids: Vec<&str> = tree.in_order().unwrap().map(|b| b.key()).collect();
    /// assert_eq!(ids, ["98108", "98109", "98110"]);
    /// ```
    pub fn in_order(&self) -> Result<InOrder<'_>, IndexError> {
        self.root
            .as_deref()
            .map(InOrder::new)
            .ok_or(IndexError::EmptyTree)
    }

    /// Node first, then left subtree, then right subtree.
    pub fn pre_order(&self) -> Result<PreOrder<'_>, IndexError> {
        self.root
            .as_deref()
            .map(PreOrder::new)
            .ok_or(IndexError::EmptyTree)
    }

    /// Left subtree, right subtree, then the node itself.
    pub fn post_order(&self) -> Result<PostOrder<'_>, IndexError> {
        self.root
            .as_deref()
            .map(PostOrder::new)
            .ok_or(IndexError::EmptyTree)
    }

    /// Traversal picked at runtime, e.g. from a shell argument.
    pub fn traverse(&self, order: TraversalOrder) -> Result<Traversal<'_>, IndexError> {
        Ok(match order {
            TraversalOrder::InOrder => Traversal::InOrder(self.in_order()?),
            TraversalOrder::PreOrder => Traversal::PreOrder(self.pre_order()?),
            TraversalOrder::PostOrder => Traversal::PostOrder(self.post_order()?),
        })
    }


    // =========================
    // Removal helpers
    // =========================

    /// Splices `node` out of its subtree and returns the new subtree root
    /// for the caller to rebind, together with the removed bid.
    ///
    /// With two children the node stays in place and takes its in-order
    /// successor's bid; otherwise the surviving child (if any) replaces it.
    fn splice_out(mut node: Box<BidNode>) -> (Link, Bid) {
        if node.left.is_some() {
            if let Some(successor) = Self::detach_leftmost(&mut node.right) {
                debug!(bid_id = %node.bid.bid_id, successor = %successor.bid_id, "spliced in successor");
                let removed = std::mem::replace(&mut node.bid, successor);
                return (Some(node), removed);
            }
        }

        let BidNode { bid, left, right } = *node;
        if left.is_none() && right.is_none() {
            debug!(bid_id = %bid.bid_id, "removed leaf");
        } else {
            debug!(bid_id = %bid.bid_id, "removed node with one child");
        }
        (left.or(right), bid)
    }

    /// Detaches the leftmost node of the subtree in `subtree` and returns
    /// its bid, or `None` for an empty subtree.
    ///
    /// The leftmost node has no left child, so its right child (if any)
    /// takes its slot. The walk down the left spine is iterative.
    fn detach_leftmost(subtree: &mut Link) -> Option<Bid> {
        let mut slot = subtree;
        while slot.as_deref().is_some_and(|node| node.left.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }

        let BidNode { bid, right, .. } = *slot.take()?;
        *slot = right;
        Some(bid)
    }

    fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&BidNode> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }
        count
    }
}


impl Drop for BidTree {
    fn drop(&mut self) {
        self.clear();
    }
}
