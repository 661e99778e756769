// =====================================================================
// File: config.rs
// Project: bidtree
// Date: Oct. 3, 2026
//
// Description:
//   Runtime settings for the bid shell. The binary fills these in
//   from its command-line arguments, everything else uses defaults.
// =====================================================================
use std::path::PathBuf;


/// Monthly sales export loaded when no path is given.
pub const DEFAULT_CSV_PATH: &str = "eBid_Monthly_Sales_Dec_2016.csv";

/// Bid id looked up or removed when a command omits one.
pub const DEFAULT_BID_KEY: &str = "98109";

/// Currency symbol stripped from the amount column.
pub const DEFAULT_CURRENCY_SYMBOL: char = '$';


/// Settings shared by the shell commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub csv_path: PathBuf,
    pub default_bid_key: String,
    pub currency_symbol: char,
}


impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            default_bid_key: DEFAULT_BID_KEY.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL,
        }
    }
}


impl ShellConfig {
    /// Defaults with any provided overrides applied.
    ///
    /// # Example
    /// ```
    /// use bidtree::ShellConfig;
    /// let config = ShellConfig::with_overrides(None, Some("12345".into()), None);
    /// assert_eq!(config.default_bid_key, "12345");
    /// assert_eq!(config.currency_symbol, '$');
    /// ```
    pub fn with_overrides(
        csv_path: Option<PathBuf>,
        bid_key: Option<String>,
        currency_symbol: Option<char>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            csv_path: csv_path.unwrap_or(defaults.csv_path),
            default_bid_key: bid_key.unwrap_or(defaults.default_bid_key),
            currency_symbol: currency_symbol.unwrap_or(defaults.currency_symbol),
        }
    }
}
