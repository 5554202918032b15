//! launcher-icons CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, dispatch to the crop or
//! icon-set step, and exit with a failing status when the step fails.
//! For programmatic use, prefer the library API (`launcher_icons::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
