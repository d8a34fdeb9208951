//! Error types and helpers for user-friendly error messages

use std::path::Path;

use console::style;
use thiserror::Error;

/// Failure classes surfaced to the user
#[derive(Error, Debug)]
pub enum OdmakeError {
    /// Configuration file errors
    #[error("configuration error: {message}")]
    Config {
        message: String,
        hint: Option<String>,
    },

    /// Tool/executable not found
    #[error("missing tool: {tool} (required for {required_for})")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// Compiler exited non-zero
    #[error("compiler exited with status {status} while building '{program}'")]
    BuildFailure { program: String, status: i32 },

    /// Produced binary exited non-zero
    #[error("{binary} exited with status {status}")]
    RunFailure { binary: String, status: i32 },
}

impl OdmakeError {
    /// Create a configuration error with a hint
    pub fn config_error_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a build failure error
    pub fn build_failure(program: impl Into<String>, status: i32) -> Self {
        Self::BuildFailure {
            program: program.into(),
            status,
        }
    }

    /// Create a run failure error
    pub fn run_failure(binary: &Path, status: i32) -> Self {
        Self::RunFailure {
            binary: binary.display().to_string(),
            status,
        }
    }

    /// Display the error with formatting and its hint, if any
    pub fn display_with_hints(&self) {
        eprintln!("{} {}", style("ERROR:").red().bold(), self);

        match self {
            OdmakeError::Config { hint, .. } => {
                if let Some(h) = hint {
                    eprintln!("{} {}", style("HINT:").yellow().bold(), h);
                }
            }
            OdmakeError::MissingTool { hint, .. } => {
                eprintln!("{} {}", style("HINT:").yellow().bold(), hint);
            }
            OdmakeError::BuildFailure { .. } | OdmakeError::RunFailure { .. } => {}
        }
    }
}

/// Common error hints for missing tools
pub mod hints {
    /// Hint for a missing Odin toolchain
    pub fn odin() -> &'static str {
        "Install the Odin compiler and make sure it is on PATH:\n\
         • macOS: brew install odin\n\
         • Linux/Windows: https://odin-lang.org/docs/install/\n\
         \n\
         Or set `compiler` in Odmake.toml to the executable path."
    }
}
