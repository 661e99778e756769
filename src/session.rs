// =====================================================================
// File: session.rs
// Project: bidtree
// Date: Oct. 4, 2026
//
// Description:
// Defines the `Session` struct, the running context the shell
// commands act on: the one bid index for this process plus the
// shell settings.
//
// Responsibilities:
// - Own the single `BidTree` for the lifetime of the REPL.
// - Carry the `ShellConfig` (default CSV path, default bid key,
//   currency symbol) so command handlers need no global state.
// =====================================================================

use crate::loader::{self, LoadError, LoadSummary};
use crate::{BidTree, ShellConfig};

/// A single in-memory bid session.
#[derive(Debug, Default)]
pub struct Session {
    /// The bid index (unbalanced binary search tree).
    pub index: BidTree,

    /// Settings the commands fall back on.
    pub config: ShellConfig,
}


impl Session {
    /// Creates a session with an empty index.
    ///
    /// # Example
    /// ```
    /// use bidtree::{Session, ShellConfig};
    /// let session = Session::new(ShellConfig::default());
    /// assert!(session.index.is_empty());
    /// ```
    pub fn new(config: ShellConfig) -> Self {
        Self {
            index: BidTree::new(),
            config,
        }
    }

    /// Loads the configured CSV file, or `path` when given, into the index.
    pub fn load(&mut self, path: Option<&str>) -> Result<LoadSummary, LoadError> {
        let symbol = self.config.currency_symbol;
        match path {
            Some(path) => loader::load_bids(path, &mut self.index, symbol),
            None => loader::load_bids(&self.config.csv_path, &mut self.index, symbol),
        }
    }

    /// The bid id to use when a command omits one.
    pub fn key_or_default<'a>(&'a self, arg: Option<&'a str>) -> &'a str {
        arg.unwrap_or(&self.config.default_bid_key)
    }
}


// =====================================================================
// Unit Tests for Session
// =====================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_new_session_initial_state() {
        let session = Session::new(ShellConfig::default());
        assert!(session.index.search("98109").is_none());
        assert_eq!(session.config.default_bid_key, "98109");
    }

    #[test]
    fn test_key_or_default() {
        let session = Session::default();
        assert_eq!(session.key_or_default(Some("1234")), "1234");
        assert_eq!(session.key_or_default(None), "98109");
    }

    #[test]
    fn test_load_uses_configured_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Title,ID,Dept,Date,Bid,Inv,Veh,Receipt,Fund").unwrap();
        writeln!(file, "Bench,777,Parks,1/1/16,$9.99,,,1,General Fund").unwrap();

        let config = ShellConfig::with_overrides(Some(file.path().to_path_buf()), None, None);
        let mut session = Session::new(config);

        let summary = session.load(None).unwrap();
        assert_eq!(summary.loaded, 1);
        assert_eq!(session.index.search("777").map(|b| b.amount), Some(9.99));
    }

    #[test]
    fn test_load_missing_file_keeps_index() {
        let mut session = Session::default();
        session.index.insert(crate::Bid::new("1", "a", "b", 1.0));
        assert!(session.load(Some("definitely/not/here.csv")).is_err());
        assert_eq!(session.index.len(), 1);
    }
}
