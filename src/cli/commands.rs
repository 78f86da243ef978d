//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// E3DB Command Line Interface
#[derive(Parser, Debug)]
#[command(name = "e3db-cli")]
#[command(version, about = "E3DB Command Line Interface", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// E3DB configuration profile
    #[arg(short, long, default_value = "")]
    pub profile: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Register an account with E3DB
    Register {
        /// Client e-mail address
        email: String,
    },

    /// List records accessible to this client
    #[command(name = "ls")]
    List {
        /// Include record data
        #[arg(short, long)]
        data: bool,

        /// Print in JSON format
        #[arg(short, long)]
        json: bool,

        /// Record content types
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        types: Vec<String>,

        /// Record IDs
        #[arg(short = 'r', long = "record", value_name = "ID")]
        records: Vec<String>,

        /// Record writer IDs or e-mail addresses
        #[arg(short = 'w', long = "writer", value_name = "ID")]
        writers: Vec<String>,

        /// Record user IDs
        #[arg(short = 'u', long = "user", value_name = "ID")]
        users: Vec<String>,
    },

    /// Read records by ID
    Read {
        /// Record IDs to read
        #[arg(required = true, value_name = "RECORD_ID")]
        record_ids: Vec<String>,
    },

    /// Write a record
    Write {
        /// Type of record to write
        #[arg(value_name = "TYPE")]
        record_type: String,

        /// JSON data to write
        data: String,
    },
}

impl Commands {
    /// Name used to prefix diagnostics for this command
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Register { .. } => "register",
            Commands::List { .. } => "ls",
            Commands::Read { .. } => "read",
            Commands::Write { .. } => "write",
        }
    }
}
