//! Run step: execute a freshly built binary

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use crate::error::OdmakeError;
use crate::exec::subprocess;
use crate::utils::terminal;

/// Execute the produced binary as a foreground child process
#[derive(Debug)]
pub struct RunCommand {
    pub binary: PathBuf,

    /// Wait for confirmation before exiting on failure
    pub hold: bool,
}

impl RunCommand {
    /// Execute the run step
    ///
    /// A missing binary is a soft warning, not an error: the build step
    /// already determined the process exit code.
    pub fn execute(self) -> Result<ExitCode> {
        if !self.binary.exists() {
            terminal::print_warning(&format!(
                "cannot run: {} not found",
                self.binary.display()
            ));
            return Ok(ExitCode::SUCCESS);
        }

        terminal::print_info(&format!("running: {}", self.binary.display()));
        println!();

        let outcome = subprocess::run_interactive(self.binary.as_os_str(), &[])?;
        if outcome.interrupted {
            println!();
            terminal::print_warning(&format!("force quit: {}", self.binary.display()));
            return Ok(ExitCode::SUCCESS);
        }

        if outcome.exit_code != 0 {
            OdmakeError::run_failure(&self.binary, outcome.exit_code).display_with_hints();
            if self.hold {
                terminal::hold_for_enter();
            }
            return Ok(ExitCode::FAILURE);
        }

        Ok(ExitCode::SUCCESS)
    }
}
