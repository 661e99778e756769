//! # bidtree
//! An in-memory bid index backed by an unbalanced binary search tree.
//!
//! ## Features
//! - Bulk load of monthly sales bids from a CSV export
//! - Ordered display (in-order, pre-order, post-order)
//! - Point lookup and removal by bid id, with timing
//! - Menu-driven command loop with numeric and word commands
//!
//! ## Usage
//! This crate is primarily consumed by the binary in `main.rs`,
//! which provides the REPL interface. All reusable logic and
//! unit tests live here so the project can be tested with `cargo test`.
// =====================================================================
// File: lib.rs
// Project: bidtree
// Date: Oct. 4, 2026
//
//   This module implements the command loop that accepts the
//   following menu choices (numbers or words, any case):
//
//     `1` | `LOAD [path]`               -> Load bids from the CSV file
//     `2` | `DISPLAY [in|pre|post]`     -> Print every bid in tree order
//     `3` | `FIND [id]`                 -> Look up a bid by id
//     `4` | `REMOVE [id]`               -> Remove a bid by id
//     `9` | `EXIT` | `QUIT`             -> Terminate the program
//     `MENU`                            -> Reprint the menu
//
//   FIND and REMOVE fall back on the configured default bid id.
// =====================================================================
pub mod bid;
pub use bid::Bid;

pub mod index;
pub use index::{BidNode, BidTree, IndexError, TraversalOrder};

pub mod loader;
pub use loader::{LoadError, LoadSummary, load_bids};

pub mod config;
pub use config::ShellConfig;

pub mod session;
pub use session::Session;

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

/// Result of handling a single user command.
///
/// - `Continue` means the REPL should keep running.
/// - `Exit` means the REPL should break out and terminate.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Exit,
}


/// Menu text shown at startup and on unrecognized input.
pub const MENU: &str = "\
Menu:
  1. Load Bids
  2. Display All Bids
  3. Find Bid
  4. Remove Bid
  9. Exit";


/// Read–Evaluate–Print Loop (REPL) over any line source.
///
/// Prints the menu, then reads one command per line from `input`,
/// executes it against the [`Session`], and writes responses to
/// `output`. Stops at end of input or on an exit command.
///
/// # Example
/// ```
/// use bidtree::{Session, repl_loop};
///
/// let mut session = Session::default();
/// let mut out = Vec::new();
/// repl_loop(&mut session, "2\n9\n".as_bytes(), &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Tree is empty"));
/// assert!(text.ends_with("Good bye.\n"));
/// ```
pub fn repl_loop<R: BufRead, W: Write>(session: &mut Session, input: R, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", MENU)?;
    write!(output, "Enter choice: ")?;
    output.flush()?;

    for input_line in input.lines() {
        let full_command = input_line?;
        let (cmd, args) = parse_command(&full_command);

        // Process command and arguments
        if handle_command(&cmd, &args, session, output)? == CommandResult::Exit {
            return Ok(());
        }
        write!(output, "Enter choice: ")?;
        output.flush()?;
    }

    // Input closed without an exit command
    writeln!(output)?;
    writeln!(output, "Good bye.")
}


/// Parses a raw input line into a command and its arguments.
///
/// The first token is treated as the command (normalized to uppercase),
/// and the remaining tokens are collected as arguments. Leading and
/// trailing whitespace is ignored.
pub fn parse_command(line: &str) -> (String, Vec<String>) {
    let mut command_segments = line.split_whitespace();
    // Normalize so lowercase commands work too
    let cmd = command_segments.next().unwrap_or("").to_uppercase();
    let args: Vec<String> = command_segments.map(|s| s.to_string()).collect();

    (cmd, args)
}


/// Handles a single command and returns whether the REPL should continue or exit.
///
/// Only menu commands operate - any other input prints an error and the menu.
/// All user-facing text goes to `out`. Failures of the index or loader are
/// reported there and never end the loop; only a failed write does.
pub fn handle_command<W: Write>(
    cmd: &str,
    args: &[String],
    session: &mut Session,
    out: &mut W,
) -> io::Result<CommandResult> {
    match cmd {

        // Load command format:  LOAD [path]
        "1" | "LOAD" => {
            // The rest of the line is the path, spaces included
            let joined = (!args.is_empty()).then(|| args.join(" "));
            let path = joined.as_deref();
            let shown = path
                .map(str::to_string)
                .unwrap_or_else(|| session.config.csv_path.display().to_string());
            writeln!(out, "Loading CSV file {}", shown)?;

            let started = Instant::now();
            match session.load(path) {
                Ok(summary) => {
                    writeln!(out, "{} bids read", summary.loaded)?;
                    if summary.skipped > 0 {
                        writeln!(out, "{} rows skipped", summary.skipped)?;
                    }
                }
                Err(e) => writeln!(out, "ERROR: {}", e)?,
            }
            write_elapsed(out, started.elapsed())?;
            Ok(CommandResult::Continue)
        }

        // Display command format:  DISPLAY [in|pre|post]
        "2" | "DISPLAY" => {
            let order = match args.first() {
                Some(arg) => match arg.parse::<TraversalOrder>() {
                    Ok(order) => order,
                    Err(e) => {
                        writeln!(out, "ERROR: {}", e)?;
                        return Ok(CommandResult::Continue);
                    }
                },
                None => TraversalOrder::default(),
            };

            match session.index.traverse(order) {
                Ok(bids) => {
                    for bid in bids {
                        writeln!(out, "{}", bid)?;
                    }
                }
                // Empty tree gets its own status line
                Err(e) => writeln!(out, "{}", e)?,
            }
            Ok(CommandResult::Continue)
        }

        // Find command format:  FIND [id]
        "3" | "FIND" => {
            let key = session.key_or_default(args.first().map(String::as_str));

            let started = Instant::now();
            let found = session.index.search(key);
            let elapsed = started.elapsed();

            match found {
                Some(bid) if bid.is_found() => writeln!(out, "{}", bid)?,
                _ => writeln!(out, "Bid Id {} not found.", key)?,
            }
            write_elapsed(out, elapsed)?;
            Ok(CommandResult::Continue)
        }

        // Remove command format:  REMOVE [id]
        "4" | "REMOVE" => {
            let key = session.key_or_default(args.first().map(String::as_str)).to_string();
            match session.index.remove(&key) {
                Ok(bid) => writeln!(out, "Bid {} removed.", bid.bid_id)?,
                // NotFound already reads "Bid <id> not found."
                Err(e) => writeln!(out, "{}", e)?,
            }
            Ok(CommandResult::Continue)
        }

        "MENU" => {
            writeln!(out, "{}", MENU)?;
            Ok(CommandResult::Continue)
        }

        // Exit command
        "9" | "EXIT" | "QUIT" => {
            writeln!(out, "Good bye.")?;
            Ok(CommandResult::Exit)
        }

        // Empty input
        "" => {
            writeln!(out, "Enter a choice.")?;
            Ok(CommandResult::Continue)
        }

        // Everything else will be noted and returned as an error
        _ => {
            writeln!(out, "ERROR: choice '{}' not handled", cmd)?;
            writeln!(out, "{}", MENU)?;
            Ok(CommandResult::Continue)
        }
    }
}


/// Prints elapsed time in microseconds and seconds.
fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "time: {} microseconds", elapsed.as_micros())?;
    writeln!(out, "time: {} seconds", elapsed.as_secs_f64())
}



// =================================================================
// lib.rs Unit tests
// =================================================================

#[cfg(test)]
mod main_lib_tests {
    use super::*;

    /// Runs one command line and returns what it printed.
    fn run(session: &mut Session, line: &str) -> (CommandResult, String) {
        let (cmd, args) = parse_command(line);
        let mut out = Vec::new();
        let result = handle_command(&cmd, &args, session, &mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    fn session_with(ids: &[&str]) -> Session {
        let mut session = Session::default();
        for id in ids {
            session.index.insert(Bid::new(*id, format!("item {id}"), "General Fund", 10.0));
        }
        session
    }

    #[test]
    fn test_parse_exit_command() {
        let (cmd, args) = parse_command("9");
        assert_eq!(cmd, "9");
        assert!(args.is_empty());
    }

    #[test]
    fn test_exit_commands() {
        let mut session = Session::default();
        for line in ["9", "exit", "QUIT"] {
            let (result, text) = run(&mut session, line);
            assert_eq!(result, CommandResult::Exit);
            assert_eq!(text, "Good bye.\n");
        }
    }

    #[test]
    fn test_whitespace_and_case() {
        let (cmd, args) = parse_command("   find    98109   ");
        assert_eq!(cmd, "FIND");
        assert_eq!(args, vec!["98109"]);
    }

    #[test]
    fn test_invalid_command_continues() {
        let mut session = Session::default();
        let (result, text) = run(&mut session, "FLY away");
        // Should not exit on bad command
        assert_eq!(result, CommandResult::Continue);
        assert!(text.starts_with("ERROR: choice 'FLY' not handled"));
        assert!(text.contains("9. Exit"));
    }

    #[test]
    fn test_empty_line() {
        let mut session = Session::default();
        let (result, text) = run(&mut session, "   ");
        assert_eq!(result, CommandResult::Continue);
        assert_eq!(text, "Enter a choice.\n");
    }

    #[test]
    fn test_display_empty_tree() {
        let mut session = Session::default();
        let (_, text) = run(&mut session, "2");
        assert_eq!(text, "Tree is empty\n");
    }

    #[test]
    fn test_display_in_order() {
        let mut session = session_with(&["98109", "98110", "98108"]);
        let (_, text) = run(&mut session, "DISPLAY");
        let ids: Vec<&str> = text.lines().map(|l| l.split(':').next().unwrap()).collect();
        assert_eq!(ids, vec!["98108", "98109", "98110"]);
        assert!(text.starts_with("98108: item 98108 | 10 | General Fund"));
    }

    #[test]
    fn test_display_pre_and_post_order() {
        let mut session = session_with(&["50", "30", "70"]);
        let (_, pre) = run(&mut session, "display pre");
        let (_, post) = run(&mut session, "2 post");
        let first = |text: &str| text.lines().next().unwrap().split(':').next().unwrap().to_string();
        assert_eq!(first(&pre), "50");
        assert_eq!(first(&post), "30");
    }

    #[test]
    fn test_display_rejects_unknown_order() {
        let mut session = session_with(&["1"]);
        let (result, text) = run(&mut session, "DISPLAY sideways");
        assert_eq!(result, CommandResult::Continue);
        assert!(text.starts_with("ERROR: unknown traversal order 'sideways'"));
    }

    #[test]
    fn test_find_existing_and_missing() {
        let mut session = session_with(&["50", "30", "70"]);

        let (_, text) = run(&mut session, "3 30");
        assert!(text.starts_with("30: item 30 | 10 | General Fund\n"));
        assert!(text.contains("microseconds"));

        let (_, text) = run(&mut session, "FIND 99999");
        assert!(text.starts_with("Bid Id 99999 not found.\n"));
    }

    #[test]
    fn test_find_uses_default_key() {
        let mut session = session_with(&["98109"]);
        let (_, text) = run(&mut session, "FIND");
        assert!(text.starts_with("98109: "));
    }

    #[test]
    fn test_find_empty_key_reports_not_found() {
        let mut session = session_with(&[""]);
        session.config.default_bid_key = String::new();
        let (_, text) = run(&mut session, "3");
        assert!(text.starts_with("Bid Id  not found."));
    }

    #[test]
    fn test_remove_command() {
        let mut session = session_with(&["50", "30", "70", "20", "40"]);

        let (result, text) = run(&mut session, "REMOVE 30");
        assert_eq!(result, CommandResult::Continue);
        assert_eq!(text, "Bid 30 removed.\n");
        assert!(session.index.search("30").is_none());

        // Removing again is a reported no-op
        let (_, text) = run(&mut session, "4 30");
        assert_eq!(text, "Bid 30 not found.\n");
        assert_eq!(session.index.len(), 4);
    }

    #[test]
    fn test_remove_on_empty_tree() {
        let mut session = Session::default();
        let (_, text) = run(&mut session, "4");
        assert_eq!(text, "Bid 98109 not found.\n");
    }

    #[test]
    fn test_load_missing_file_reports_error() {
        let mut session = Session::default();
        let (result, text) = run(&mut session, "LOAD no/such/file.csv");
        assert_eq!(result, CommandResult::Continue);
        assert!(text.contains("ERROR: could not open bid file"));
        assert!(session.index.is_empty());
    }

    #[test]
    fn test_load_path_with_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dec 2016 sales.csv");
        std::fs::write(
            &path,
            "ArticleTitle,ArticleID,Department,CloseDate,WinningBid,InventoryID,VehicleID,ReceiptNumber,Fund\n\
             Desk,300,Ops,12/1/16,$5.00,,,1,General Fund\n",
        )
        .unwrap();

        let mut session = Session::default();
        let (result, text) = run(&mut session, &format!("LOAD {}", path.display()));
        assert_eq!(result, CommandResult::Continue);
        assert!(text.contains("1 bids read"), "{text}");
        assert!(session.index.search("300").is_some());
    }

    #[test]
    fn test_repl_loop_runs_until_exit() {
        let mut session = session_with(&["b", "a"]);
        let mut out = Vec::new();
        repl_loop(&mut session, "3 a\n9\n2\n".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("a: item a"));
        assert!(text.ends_with("Good bye.\n"));
        // The display after exit never ran
        assert!(!text.contains("b: item b"));
    }

    #[test]
    fn test_repl_loop_stops_at_end_of_input() {
        let mut session = Session::default();
        let mut out = Vec::new();
        repl_loop(&mut session, "".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Menu:"));
        assert!(text.ends_with("Good bye.\n"));
    }
}
