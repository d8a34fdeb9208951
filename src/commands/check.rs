//! Check command implementation
//!
//! Sweeps every immediate subdirectory of the source root, compiling each
//! as an independent program with the composed flag set. Individual
//! failures are reported and do not stop the sweep.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::build::platform::{executable_name, HostOs};
use crate::build::{compose_flags, Profile};
use crate::commands::build::{compile, BuildOutcome};
use crate::commands::clean::remove_tree;
use crate::config::ProjectConfig;
use crate::utils::{paths, terminal};

/// Build every program under the source root and report each outcome
#[derive(Debug)]
pub struct CheckCommand {
    pub profile: Profile,
    pub os: HostOs,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(self, config: &ProjectConfig, verbose: bool) -> Result<ExitCode> {
        let project_dir =
            std::env::current_dir().context("failed to get current working directory")?;
        let out_dir = paths::profile_dir(&project_dir, self.profile);

        if self.profile == Profile::Release {
            remove_tree(&out_dir)?;
        }
        paths::ensure_dir(&out_dir)?;

        let flags = compose_flags(self.profile, config, self.os);
        if verbose {
            eprintln!("flags: {}", flags.join(" "));
        }

        let programs = self.discover_programs(config)?;
        if programs.is_empty() {
            terminal::print_warning(&format!(
                "no programs found under {}",
                config.source_root.display()
            ));
            return Ok(ExitCode::SUCCESS);
        }

        let mut passed: Vec<String> = Vec::new();
        let mut failed: Vec<String> = Vec::new();

        for source in &programs {
            let name = source
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| source.display().to_string());

            println!("{}", "-".repeat(64));
            println!("building: {name}");

            let binary = out_dir.join(executable_name(&name, self.os));
            match compile(config, source, &binary, &flags)? {
                BuildOutcome::Interrupted => {
                    println!();
                    terminal::print_warning(&format!("force quit: {}", binary.display()));
                    return Ok(ExitCode::SUCCESS);
                }
                BuildOutcome::Failed(status) => {
                    println!("✗ {name} (compiler exited with status {status})");
                    failed.push(name);
                }
                BuildOutcome::Success => {
                    println!("✓ {name}");
                    passed.push(name);
                }
            }
            println!();
        }

        print_summary(&passed, &failed);
        Ok(ExitCode::SUCCESS)
    }

    /// Immediate subdirectories of the source root, in sorted order
    fn discover_programs(&self, config: &ProjectConfig) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&config.source_root).with_context(|| {
            format!("failed to read source root: {}", config.source_root.display())
        })?;

        let mut programs = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                programs.push(entry.path());
            }
        }

        programs.sort();
        Ok(programs)
    }
}

fn print_summary(passed: &[String], failed: &[String]) {
    println!("{}", "-".repeat(64));
    terminal::print_success(&format!(
        "{} of {} programs built",
        passed.len(),
        passed.len() + failed.len()
    ));
    for name in failed {
        println!("  failed: {name}");
    }
}
