//! CLI module
//!
//! Command-line interface for the record service.
//!
//! # Commands
//!
//! - `register` - Register a new client and save it as a profile
//! - `ls` - Query records, as a table or a streamed JSON array
//! - `read` - Fetch records by identifier
//! - `write` - Store a new record

mod commands;
mod render;
mod runner;

pub use commands::{Cli, Commands};
pub use render::{render_stream, JsonArrayWriter, OutputMode};
pub use runner::{GlobalOptions, Runner, PROGRAM};
