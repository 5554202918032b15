//! Command Line Interface (CLI) layer.
//!
//! `args` defines the `crop` and `icons` subcommands, `errors` the CLI-only
//! failures, and `runner` wires the parsed options to `launcher_icons::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
