//! Odmake.toml configuration parsing
//!
//! The configuration file is optional; every field has a default, so an
//! empty or absent file describes the stock demo project. Collections are
//! an array of tables and keep their file order in the composed flag set.
//!
//! ```toml
//! program = "cartoon"
//! source = "src/1_6_multiple_textures"
//! source-root = "src"
//! compiler = "odin"
//!
//! [[collection]]
//! name = "sokol"
//! path = "sokol-odin/sokol"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::OdmakeError;

/// Configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "Odmake.toml";

/// Project configuration resolved once at startup
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectConfig {
    /// Output binary stem
    #[serde(default = "default_program")]
    pub program: String,

    /// Source path handed to the compiler
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Directory whose immediate subdirectories are swept by check mode
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Compiler executable name or path
    #[serde(default = "default_compiler")]
    pub compiler: String,

    /// Library collections referenced by the sources
    #[serde(default = "default_collections", rename = "collection")]
    pub collections: Vec<CollectionConfig>,
}

/// One library collection, passed as `-collection:<name>=<path>`
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionConfig {
    pub name: String,
    pub path: String,
}

fn default_program() -> String {
    "cartoon".to_string()
}

fn default_source() -> PathBuf {
    PathBuf::from("src/1_6_multiple_textures")
}

fn default_source_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_compiler() -> String {
    "odin".to_string()
}

fn default_collections() -> Vec<CollectionConfig> {
    vec![CollectionConfig {
        name: "sokol".to_string(),
        path: "sokol-odin/sokol".to_string(),
    }]
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            source: default_source(),
            source_root: default_source_root(),
            compiler: default_compiler(),
            collections: default_collections(),
        }
    }
}

impl ProjectConfig {
    /// Load the configuration from the current working directory
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current working directory")?;
        Self::load_from_dir(&cwd)
    }

    /// Load the configuration from a specific directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&text)
    }

    /// Parse a configuration from TOML text
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            OdmakeError::config_error_with_hint(
                format!("invalid {CONFIG_FILE}: {e}"),
                "every field is optional: program, source, source-root, compiler, \
                 and [[collection]] tables with name and path",
            )
            .into()
        })
    }

    /// Collection flags in file order, constant across profiles
    pub fn collection_flags(&self) -> Vec<String> {
        self.collections
            .iter()
            .map(|c| format!("-collection:{}={}", c.name, c.path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ProjectConfig::parse("").unwrap();
        assert_eq!(config.program, "cartoon");
        assert_eq!(config.source, PathBuf::from("src/1_6_multiple_textures"));
        assert_eq!(config.source_root, PathBuf::from("src"));
        assert_eq!(config.compiler, "odin");
        assert_eq!(
            config.collection_flags(),
            vec!["-collection:sokol=sokol-odin/sokol".to_string()]
        );
    }

    #[test]
    fn full_config_overrides_every_field() {
        let toml = r#"
program = "demo"
source = "src/water"
source-root = "demos"
compiler = "odin-nightly"

[[collection]]
name = "sokol"
path = "vendor/sokol"

[[collection]]
name = "shared"
path = "vendor/shared"
"#;

        let config = ProjectConfig::parse(toml).unwrap();
        assert_eq!(config.program, "demo");
        assert_eq!(config.source, PathBuf::from("src/water"));
        assert_eq!(config.source_root, PathBuf::from("demos"));
        assert_eq!(config.compiler, "odin-nightly");
        assert_eq!(
            config.collection_flags(),
            vec![
                "-collection:sokol=vendor/sokol".to_string(),
                "-collection:shared=vendor/shared".to_string(),
            ]
        );
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config = ProjectConfig::parse("program = \"demo\"\n").unwrap();
        assert_eq!(config.program, "demo");
        assert_eq!(config.compiler, "odin");
        assert_eq!(config.collections.len(), 1);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(ProjectConfig::parse("program = ").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = ProjectConfig::load_from_dir(tmp.path()).unwrap();
        assert_eq!(config.program, "cartoon");
    }

    #[test]
    fn file_in_directory_is_loaded() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "program = \"demo\"\n").unwrap();
        let config = ProjectConfig::load_from_dir(tmp.path()).unwrap();
        assert_eq!(config.program, "demo");
    }
}
