//! CLI argument parsing using clap derive macros

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::build::platform::HostOs;
use crate::build::Profile;
use crate::commands::{build::BuildCommand, check::CheckCommand, clean::CleanCommand};
use crate::config::ProjectConfig;

/// odmake - build orchestration for Odin graphics demos
///
/// Wraps `odin build` with a debug/release profile switch, a clean step,
/// and an optional run-after-build step.
#[derive(Parser, Debug)]
#[command(name = "odmake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Build with speed optimization, vetting, and no bounds checks
    #[arg(long, conflicts_with = "debug")]
    pub release: bool,

    /// Build with debug info and minimal optimization
    #[arg(long)]
    pub debug: bool,

    /// Remove the build directory and exit
    #[arg(long)]
    pub clean: bool,

    /// Run the binary after a successful build
    #[arg(long)]
    pub run: bool,

    /// Wait for confirmation before exiting on a failed build or run
    #[arg(long)]
    pub hold: bool,

    /// Build every program under the source root and report each outcome
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the selected operation
    pub fn execute(self) -> Result<ExitCode> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        // Clean takes priority over every other flag and never touches
        // the compiler or the project configuration.
        if self.clean {
            return CleanCommand.execute(self.verbose);
        }

        let profile = match self.profile() {
            Some(profile) => profile,
            None => {
                println!("pass one argument: --release | --debug | --clean | --help");
                return Ok(ExitCode::FAILURE);
            }
        };

        let config = ProjectConfig::load()?;
        let os = HostOs::detect();

        if self.check {
            return CheckCommand { profile, os }.execute(&config, self.verbose);
        }

        BuildCommand {
            profile,
            os,
            run: self.run,
            hold: self.hold,
        }
        .execute(&config, self.verbose)
    }

    fn profile(&self) -> Option<Profile> {
        if self.release {
            Some(Profile::Release)
        } else if self.debug {
            Some(Profile::Debug)
        } else {
            None
        }
    }
}
