//! Path arguments shared by all commands

use anyhow::{Context, Result};
use astarte_gen_core::GeneratorConfig;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct PathArgs {
    /// Location of the interface .json file(s)
    pub interfaces_dir: Option<PathBuf>,

    /// Output directory for the generated header file
    #[arg(short = 'i', long)]
    pub header_dir: Option<PathBuf>,

    /// Output directory for the generated source file
    #[arg(short = 's', long)]
    pub source_dir: Option<PathBuf>,
}

impl PathArgs {
    /// Build the run configuration.
    ///
    /// Starts from the config file when given, defaults otherwise, then
    /// applies the explicit flags.
    pub fn resolve(self, config_file: Option<&str>) -> Result<GeneratorConfig> {
        let base = match config_file {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration: {path}"))?,
            None => GeneratorConfig::default(),
        };

        Ok(self.apply(base))
    }

    fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(dir) = self.interfaces_dir {
            config.interfaces_dir = dir;
        }
        if let Some(dir) = self.header_dir {
            config.header_dir = dir;
        }
        if let Some(dir) = self.source_dir {
            config.source_dir = dir;
        }
        config
    }
}
