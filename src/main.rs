//! E3DB CLI
//!
//! Command-line interface for the E3DB record store

use clap::Parser;
use e3db_cli::cli::{Cli, Runner, PROGRAM};
use e3db_cli::client::E3dbProvider;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --debug
    e3db_cli::logging::init(cli.debug);

    let runner = Runner::new(cli);
    let command = runner.command_name();

    let provider = match E3dbProvider::from_env() {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("{PROGRAM}: {command}: {e}");
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let result = runner
        .run(&provider, &mut stdout.lock(), &mut stderr.lock())
        .await;

    if let Err(e) = result {
        eprintln!("{PROGRAM}: {command}: {e}");
        std::process::exit(1);
    }
}
