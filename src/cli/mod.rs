//! Command-line interface.
//!
//! Each command returns an `ExitStatus`; errors bubble up as `anyhow::Error`
//! and are reported by `main`.

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use run::run_cli;
