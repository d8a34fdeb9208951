//! Build command implementation

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::build::platform::{executable_name, HostOs};
use crate::build::{compose_flags, Profile};
use crate::commands::clean::remove_tree;
use crate::commands::run::RunCommand;
use crate::config::ProjectConfig;
use crate::error::{hints, OdmakeError};
use crate::exec::subprocess;
use crate::utils::{paths, terminal};

/// Build the configured program with the selected profile
#[derive(Debug)]
pub struct BuildCommand {
    pub profile: Profile,
    pub os: HostOs,

    /// Run the binary after a successful build
    pub run: bool,

    /// Wait for confirmation before exiting on failure
    pub hold: bool,
}

impl BuildCommand {
    /// Execute the build command
    pub fn execute(self, config: &ProjectConfig, verbose: bool) -> Result<ExitCode> {
        let project_dir =
            std::env::current_dir().context("failed to get current working directory")?;
        let out_dir = paths::profile_dir(&project_dir, self.profile);

        // A release build never reuses artifacts from an earlier flag set.
        if self.profile == Profile::Release {
            remove_tree(&out_dir)?;
        }
        paths::ensure_dir(&out_dir)?;

        let flags = compose_flags(self.profile, config, self.os);
        if verbose {
            eprintln!("profile: {}", self.profile);
            eprintln!("flags: {}", flags.join(" "));
        }

        let binary = out_dir.join(executable_name(&config.program, self.os));

        match compile(config, &config.source, &binary, &flags)? {
            BuildOutcome::Interrupted => {
                println!();
                terminal::print_warning(&format!("force quit: {}", binary.display()));
                Ok(ExitCode::SUCCESS)
            }
            BuildOutcome::Failed(status) => {
                OdmakeError::build_failure(&config.program, status).display_with_hints();
                if self.hold {
                    terminal::hold_for_enter();
                }
                Ok(ExitCode::FAILURE)
            }
            BuildOutcome::Success => {
                if self.run {
                    RunCommand {
                        binary,
                        hold: self.hold,
                    }
                    .execute()
                } else {
                    Ok(ExitCode::SUCCESS)
                }
            }
        }
    }
}

/// Outcome of a single compiler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    Failed(i32),
    Interrupted,
}

/// Invoke the compiler for one source path, echoing the command line first
pub fn compile(
    config: &ProjectConfig,
    source: &Path,
    binary: &Path,
    flags: &[String],
) -> Result<BuildOutcome> {
    if !subprocess::command_exists(&config.compiler) {
        return Err(OdmakeError::missing_tool(
            &config.compiler,
            "building Odin programs",
            hints::odin(),
        )
        .into());
    }

    let mut args: Vec<String> = vec![
        "build".to_string(),
        source.display().to_string(),
        format!("-out:{}", binary.display()),
    ];
    args.extend(flags.iter().cloned());

    println!("{} {}", config.compiler, args.join(" "));

    let outcome = subprocess::run_interactive(config.compiler.as_ref(), &args)?;
    if outcome.interrupted {
        Ok(BuildOutcome::Interrupted)
    } else if outcome.exit_code != 0 {
        Ok(BuildOutcome::Failed(outcome.exit_code))
    } else {
        Ok(BuildOutcome::Success)
    }
}
