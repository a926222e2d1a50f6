//! addrbook CLI entry point
//!
//! Parses arguments, dispatches to `cli::run`, prints any error to stderr
//! and exits non-zero on failure.

use addrbook::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
