//! Subprocess execution with interrupt handling
//!
//! All child invocations go through [`run_interactive`], which reports a
//! structured outcome instead of exposing platform signal APIs to the
//! callers. A Ctrl-C during the wait is recorded, not fatal: the child
//! shares the terminal's process group and receives the signal itself,
//! while the orchestrator survives to report the cancellation.

use std::ffi::OsStr;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use anyhow::{Context, Result};

static INSTALL_GUARD: Once = Once::new();
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Result of an awaited child process
#[derive(Debug)]
pub struct ExecOutcome {
    /// Process exit code (-1 when terminated by a signal)
    pub exit_code: i32,

    /// Whether the wait ended in a user interrupt
    pub interrupted: bool,
}

impl ExecOutcome {
    /// Whether the child ran to completion with exit code 0
    pub fn success(&self) -> bool {
        !self.interrupted && self.exit_code == 0
    }
}

fn install_interrupt_guard() {
    INSTALL_GUARD.call_once(|| {
        let _ = ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst));
    });
}

/// Run a command with inherited standard streams and wait for it to exit
pub fn run_interactive(program: &OsStr, args: &[String]) -> Result<ExecOutcome> {
    install_interrupt_guard();
    INTERRUPTED.store(false, Ordering::SeqCst);

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("failed to execute {}", program.to_string_lossy()))?;

    let interrupted = INTERRUPTED.load(Ordering::SeqCst) || killed_by_interrupt(&status);
    Ok(ExecOutcome {
        exit_code: status.code().unwrap_or(-1),
        interrupted,
    })
}

#[cfg(unix)]
fn killed_by_interrupt(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    // SIGINT
    status.signal() == Some(2)
}

#[cfg(not(unix))]
fn killed_by_interrupt(_status: &ExitStatus) -> bool {
    false
}

/// Check if a command exists in PATH (or at the given path)
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}
