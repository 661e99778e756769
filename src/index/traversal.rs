// =====================================================================
// File: index/traversal.rs
// Project: bidtree
// Date: Oct. 9, 2026
//
// Description:
//   Lazy depth-first iterators over a `BidNode` subtree:
//
//   - `InOrder`  : left, node, right (ascending key order).
//   - `PreOrder` : node, left, right.
//   - `PostOrder`: left, right, node.
//
// Notes:
//   * Each iterator keeps its own stack instead of recursing, so a
//     degenerate chain of any length is walked without stack growth.
//   * Empty trees never reach these types - `BidTree` reports
//     `IndexError::EmptyTree` before building one.
// =====================================================================
use std::str::FromStr;

use super::{BidNode, IndexError};
use crate::Bid;


/// Which depth-first order to walk the tree in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    #[default]
    InOrder,
    PreOrder,
    PostOrder,
}


impl FromStr for TraversalOrder {
    type Err = IndexError;

    /// Accepts `in`, `pre`, `post` (or the `-order` long forms), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" | "inorder" | "in-order" => Ok(TraversalOrder::InOrder),
            "pre" | "preorder" | "pre-order" => Ok(TraversalOrder::PreOrder),
            "post" | "postorder" | "post-order" => Ok(TraversalOrder::PostOrder),
            _ => Err(IndexError::UnknownOrder(s.to_string())),
        }
    }
}


/// In-order iterator. The stack holds the left spine still to visit.
#[derive(Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a BidNode>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: &'a BidNode) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(Some(root));
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a BidNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.bid)
    }
}


/// Pre-order iterator.
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a BidNode>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: &'a BidNode) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so left is popped first
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.bid)
    }
}


/// Post-order iterator.
///
/// A node is pushed once unexpanded. When popped it is pushed back as
/// expanded with its children above it, and yielded on its second pop.
#[derive(Debug)]
pub struct PostOrder<'a> {
    stack: Vec<(&'a BidNode, bool)>,
}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(root: &'a BidNode) -> Self {
        Self { stack: vec![(root, false)] }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.bid);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}


/// Any of the three traversals, chosen at runtime.
#[derive(Debug)]
pub enum Traversal<'a> {
    InOrder(InOrder<'a>),
    PreOrder(PreOrder<'a>),
    PostOrder(PostOrder<'a>),
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::InOrder(iter) => iter.next(),
            Traversal::PreOrder(iter) => iter.next(),
            Traversal::PostOrder(iter) => iter.next(),
        }
    }
}
