//! Clean command implementation

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::utils::{paths, terminal};

/// Remove the build output tree
#[derive(Debug)]
pub struct CleanCommand;

impl CleanCommand {
    /// Execute the clean command
    pub fn execute(self, _verbose: bool) -> Result<ExitCode> {
        let project_dir =
            std::env::current_dir().context("failed to get current working directory")?;
        remove_tree(&paths::build_root(&project_dir))?;
        Ok(ExitCode::SUCCESS)
    }
}

/// Delete a directory tree, reporting what was removed
///
/// A missing directory is an acceptable end state, not an error, which
/// makes repeated invocations safe no-ops.
pub fn remove_tree(path: &Path) -> Result<()> {
    if !path.exists() {
        println!("no directory to clean at: {}", path.display());
        return Ok(());
    }

    let size = dir_size(path);
    std::fs::remove_dir_all(path)
        .with_context(|| format!("failed to remove {}", path.display()))?;
    terminal::print_success(&format!(
        "removed {} ({})",
        path.display(),
        format_size(size)
    ));
    Ok(())
}

fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| e.metadata().ok())
        .filter(|m| m.is_file())
        .map(|m| m.len())
        .sum()
}

fn format_size(size_bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_idx])
}
