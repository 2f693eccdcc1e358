//! Configuration surface for the filestat probe.
//!
//! The host runtime owns where configuration comes from; this module gives it
//! a serde-backed shape to parse into and a factory to turn the parsed values
//! into a ready [`FileStat`] gatherer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::collectors::filestat::FileStat;

/// Sample configuration snippet, in the shape [`FileStatConfig`] parses
pub const SAMPLE_CONFIG: &str = r#"
## Files to gather stats about.
files: [""]
## If true, read the entire file and calculate an md5 checksum.
checksum: false
"#;

/// Parsed configuration for one filestat probe instance.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FileStatConfig {
    /// Files to gather stats about
    #[serde(default)]
    pub files: Vec<String>,
    /// Read each file fully and report an MD5 checksum
    #[serde(default)]
    pub checksum: bool,
}

impl FileStatConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: FileStatConfig =
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Build a gatherer with this configuration bound.
    ///
    /// This is the factory the host runtime calls once per configured probe
    /// instance; each call returns a fresh, independent gatherer.
    pub fn build(&self) -> FileStat {
        FileStat::new(self.files.clone(), self.checksum)
    }
}
