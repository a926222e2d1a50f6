//! CLI module for addrbook
//!
//! Provides command-line interface for:
//! - init: Create the data directory and an empty slot
//! - list / show: Read contacts
//! - add / update / delete: Mutate contacts
//! - validate: Check field values without storing them
//! - regions: Print the configured region reference list
//! - serve: Line-delimited JSON request loop on stdin/stdout

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, FieldArgs};
pub use commands::{run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_json, write_response};
