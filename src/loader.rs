// ============================================================
// File: loader.rs
// Project: bidtree
// Date: Oct. 3, 2026
//
// Description:
//   Bulk loads bids from a monthly sales CSV export into the
//   in-memory index. Each data row is normalized into a `Bid`
//   and inserted one at a time.
//
// Column layout (eBid monthly sales export):
//   0 -> title, 1 -> bid id, 4 -> winning bid amount, 8 -> fund
//
// Notes:
//   - Amounts carry a currency symbol ("$1,234.50"). The symbol
//     and thousands separators are stripped before parsing, and
//     anything unparsable defaults to 0.0.
//   - A bad row is logged and skipped. Only failing to open the
//     file or read its header aborts the load.
// ============================================================
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{Bid, BidTree};


pub const TITLE_COLUMN: usize = 0;
pub const BID_ID_COLUMN: usize = 1;
pub const AMOUNT_COLUMN: usize = 4;
pub const FUND_COLUMN: usize = 8;

/// A row needs at least this many columns to be turned into a bid.
pub const MIN_COLUMNS: usize = FUND_COLUMN + 1;


/// Failures that stop a load before any row is read.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("could not open bid file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read bid file header: {0}")]
    Csv(#[from] csv::Error),
}


/// Counts reported back to the shell after a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}


/// Converts an amount field to a float after stripping `symbol`.
///
/// Every occurrence of the symbol is removed, as are `,` thousands
/// separators. Returns `0.0` when the remainder does not parse.
///
/// # Example
/// ```
/// use bidtree::loader::parse_amount;
/// assert_eq!(parse_amount("$1,234.50", '$'), 1234.5);
/// assert_eq!(parse_amount("n/a", '$'), 0.0);
/// ```
pub fn parse_amount(text: &str, symbol: char) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|&c| c != symbol && c != ',')
        .collect();
    cleaned.trim().parse().unwrap_or(0.0)
}


/// Builds a bid from one CSV row, or `None` when the row is too short.
pub fn bid_from_record(record: &csv::StringRecord, symbol: char) -> Option<Bid> {
    if record.len() < MIN_COLUMNS {
        return None;
    }
    Some(Bid {
        bid_id: record[BID_ID_COLUMN].to_string(),
        title: record[TITLE_COLUMN].to_string(),
        fund: record[FUND_COLUMN].to_string(),
        amount: parse_amount(&record[AMOUNT_COLUMN], symbol),
    })
}


/// Load every bid in the CSV file at `path` into `tree`.
///
/// # Arguments
///
/// * `path`   - CSV file with a header row.
/// * `tree`   - Index the bids are inserted into (existing bids are kept).
/// * `symbol` - Currency symbol stripped from the amount column.
///
/// # Behavior
///
/// - Rows with fewer than [`MIN_COLUMNS`] fields, or that the CSV
///   reader rejects, are skipped with a warning.
/// - Every other row is inserted, duplicates included.
///
/// # Example
/// ```no_run
/// use bidtree::{BidTree, loader::load_bids};
///
/// let mut tree = BidTree::new();
/// let summary = load_bids("eBid_Monthly_Sales_Dec_2016.csv", &mut tree, '$').unwrap();
/// assert_eq!(summary.loaded, tree.len());
/// ```
pub fn load_bids(
    path: impl AsRef<Path>,
    tree: &mut BidTree,
    symbol: char,
) -> Result<LoadSummary, LoadError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading bids");

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    // Flexible so a short row is a skipped row, not a reader error
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let header = reader.headers()?;
    debug!(columns = header.len(), header = ?header, "read bid file header");

    let mut summary = LoadSummary::default();
    for (idx, row) in reader.records().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let line = idx + 2;
        match row {
            Ok(record) => match bid_from_record(&record, symbol) {
                Some(bid) => {
                    tree.insert(bid);
                    summary.loaded += 1;
                }
                None => {
                    warn!(line, columns = record.len(), "skipping short bid row");
                    summary.skipped += 1;
                }
            },
            Err(e) => {
                warn!(line, error = %e, "skipping unreadable bid row");
                summary.skipped += 1;
            }
        }
    }

    info!(loaded = summary.loaded, skipped = summary.skipped, "finished loading bids");
    Ok(summary)
}
