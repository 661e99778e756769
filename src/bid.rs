// =====================================================================
// File: bid.rs
// Project: bidtree
// Date: Oct. 2, 2026
//
// Description:
//   Defines the `Bid` record stored by the index. A bid is an
//   immutable value with four fields:
//
//   - `bid_id`: Unique key, compared lexicographically on the raw string.
//   - `title` : Auction item title.
//   - `fund`  : Fund the sale is credited to.
//   - `amount`: Winning bid amount (0.0 when the source was unparsable).
//
// Notes:
//   * The loader is responsible for normalizing raw rows before they
//     reach the index. Nothing here validates fields.
// =====================================================================
use std::fmt;


/// A single auction bid, keyed by `bid_id`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bid {
    pub bid_id: String,
    pub title: String,
    pub fund: String,
    pub amount: f64,
}


impl Bid {
    /// Builds a bid from its four fields.
    ///
    /// # Example
    /// ```
    /// use bidtree::Bid;
    /// let bid = Bid::new("98109", "Dell Laptop", "General Fund", 125.0);
    /// assert_eq!(bid.bid_id, "98109");
    /// assert_eq!(bid.amount, 125.0);
    /// ```
    pub fn new(
        bid_id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            bid_id: bid_id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }

    /// The key used for every ordering decision in the tree.
    pub fn key(&self) -> &str {
        &self.bid_id
    }

    /// Callers treat a bid with an empty key as "not found".
    pub fn is_found(&self) -> bool {
        !self.bid_id.is_empty()
    }
}


/// One report line: `id: title | amount | fund`.
impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} | {} | {}", self.bid_id, self.title, self.amount, self.fund)
    }
}
