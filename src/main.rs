//! odmake CLI - build orchestration for Odin graphics demos
//!
//! A thin wrapper around `odin build`: composes the flag set for the
//! selected profile, shells out to the compiler, and optionally runs the
//! produced binary.
//!
//! ## Architecture
//!
//! ```text
//! CLI → commands/ modules → odin (direct)
//! ```

mod build;
mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use error::OdmakeError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.execute() {
        Ok(code) => code,
        Err(err) => {
            match err.downcast_ref::<OdmakeError>() {
                Some(e) => e.display_with_hints(),
                None => utils::terminal::print_error(&format!("{err:#}")),
            }
            ExitCode::FAILURE
        }
    }
}
