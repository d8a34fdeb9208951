//! Path helpers for the build tree

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::build::Profile;

/// Root directory for build outputs
pub fn build_root(project_dir: &Path) -> PathBuf {
    project_dir.join("build")
}

/// Per-profile output directory under the build root
pub fn profile_dir(project_dir: &Path, profile: Profile) -> PathBuf {
    build_root(project_dir).join(profile.dir_name())
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn profile_dirs_live_under_the_build_root() {
        let project = Path::new("/work/demo");
        assert_eq!(build_root(project), Path::new("/work/demo/build"));
        assert_eq!(
            profile_dir(project, Profile::Debug),
            Path::new("/work/demo/build/debug")
        );
        assert_eq!(
            profile_dir(project, Profile::Release),
            Path::new("/work/demo/build/release")
        );
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("build").join("debug");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call is a no-op.
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
