//! The CLI can do a few things. This provides a central point where those things are routed and
//! then done, making it easier to test this crate deterministically.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sigma_spl_cli::{run, Command};

/// The command-line arguments.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The configuration directory.
    #[arg(long = "configuration", env = "SIGMA_SPL_CONFIGURATION", default_value = ".")]
    context_path: PathBuf,
    /// The command to invoke.
    #[command(subcommand)]
    subcommand: Command,
}

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();
    match run(args.subcommand, &args.context_path, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
