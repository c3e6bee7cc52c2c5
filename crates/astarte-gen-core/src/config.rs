//! Generator configuration

use crate::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Banner placed at the top of both generated documents
pub const DEFAULT_LICENSE_BANNER: &str = "/*
 * (C) Copyright 2023, SECO Mind Srl
 *
 * SPDX-License-Identifier: LGPL-2.1-or-later OR Apache-2.0
 */";

/// Paths and names used by a generation run
///
/// Every field has a default, so an empty TOML document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory scanned for interface schema files
    pub interfaces_dir: PathBuf,

    /// Directory receiving the generated header
    pub header_dir: PathBuf,

    /// Directory receiving the generated source
    pub source_dir: PathBuf,

    /// File name of the generated header
    pub header_file_name: String,

    /// File name of the generated source
    pub source_file_name: String,

    /// Device library header declaring `astarte_interface_t`
    pub base_header: String,

    /// Extension (without the dot) of schema files
    pub schema_extension: String,

    /// Comment block emitted before everything else in both documents
    pub license_banner: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let project = Path::new("examples").join("aggregates");
        Self {
            interfaces_dir: project.join("interfaces"),
            header_dir: project.join("main").join("include"),
            source_dir: project.join("main").join("src"),
            header_file_name: "astarte_interface_gen.h".to_string(),
            source_file_name: "astarte_interface_gen.c".to_string(),
            base_header: "astarte_interface.h".to_string(),
            schema_extension: "json".to_string(),
            license_banner: DEFAULT_LICENSE_BANNER.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    ///
    /// Relative directories in the file are taken relative to the file's own
    /// directory.
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
        let config = Self::from_toml(&content)?;

        Ok(match path.parent() {
            Some(base) if !base.as_os_str().is_empty() => config.relative_to(base),
            _ => config,
        })
    }

    /// Rebase relative directories onto `base`
    pub fn relative_to(mut self, base: &Path) -> Self {
        for dir in [
            &mut self.interfaces_dir,
            &mut self.header_dir,
            &mut self.source_dir,
        ] {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
        self
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> GenResult<Self> {
        toml::from_str(content).map_err(|e| GenError::Config(e.to_string()))
    }

    /// Full path of the generated header
    pub fn header_path(&self) -> PathBuf {
        self.header_dir.join(&self.header_file_name)
    }

    /// Full path of the generated source
    pub fn source_path(&self) -> PathBuf {
        self.source_dir.join(&self.source_file_name)
    }

    /// Validate the configuration
    pub fn validate(&self) -> GenResult<()> {
        for (field, value) in [
            ("header_file_name", &self.header_file_name),
            ("source_file_name", &self.source_file_name),
            ("base_header", &self.base_header),
        ] {
            if value.is_empty() {
                return Err(GenError::Config(format!("{field} cannot be empty")));
            }
            if value.contains(['/', '\\']) {
                return Err(GenError::Config(format!(
                    "{field} must be a bare file name, got {value:?}"
                )));
            }
        }

        if self.schema_extension.is_empty() {
            return Err(GenError::Config("schema_extension cannot be empty".into()));
        }

        if self.header_path() == self.source_path() {
            return Err(GenError::Config(
                "header and source outputs resolve to the same file".into(),
            ));
        }

        Ok(())
    }
}
