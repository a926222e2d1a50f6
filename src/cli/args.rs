//! CLI argument definitions using clap
//!
//! Commands:
//! - addrbook init --config <path>
//! - addrbook list --config <path>
//! - addrbook show --config <path> --id <id>
//! - addrbook add --config <path> [field flags]
//! - addrbook update --config <path> --id <id> [field flags]
//! - addrbook delete --config <path> --id <id>
//! - addrbook validate [field flags]
//! - addrbook regions --config <path>
//! - addrbook serve --config <path>

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::validation::RawFields;

/// addrbook - a validated, file-backed address book
#[derive(Parser, Debug)]
#[command(name = "addrbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory and an empty address book
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./addrbook.json")]
        config: PathBuf,
    },

    /// List all contacts in insertion order
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./addrbook.json")]
        config: PathBuf,
    },

    /// Show one contact
    Show {
        /// Path to configuration file
        #[arg(long, default_value = "./addrbook.json")]
        config: PathBuf,

        #[arg(long)]
        id: u64,
    },

    /// Validate and add a new contact
    Add {
        /// Path to configuration file
        #[arg(long, default_value = "./addrbook.json")]
        config: PathBuf,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Validate and overwrite an existing contact
    Update {
        /// Path to configuration file
        #[arg(long, default_value = "./addrbook.json")]
        config: PathBuf,

        #[arg(long)]
        id: u64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a contact
    Delete {
        /// Path to configuration file
        #[arg(long, default_value = "./addrbook.json")]
        config: PathBuf,

        #[arg(long)]
        id: u64,
    },

    /// Check field values without storing anything
    Validate {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Print the region reference list
    Regions {
        /// Path to configuration file
        #[arg(long, default_value = "./addrbook.json")]
        config: PathBuf,
    },

    /// Serve JSON requests from stdin, one per line
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./addrbook.json")]
        config: PathBuf,
    },
}

/// Contact form fields. Omitted flags are submitted empty.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub street_addr: String,

    #[arg(long, default_value = "")]
    pub postal_code: String,

    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub state: String,

    #[arg(long, default_value = "")]
    pub labels: String,
}

impl From<FieldArgs> for RawFields {
    fn from(args: FieldArgs) -> Self {
        RawFields {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone: args.phone,
            street_address: args.street_addr,
            postal_code: args.postal_code,
            city: args.city,
            state: args.state,
            labels: args.labels,
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
