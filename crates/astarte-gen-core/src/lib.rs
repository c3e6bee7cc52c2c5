//! astarte-gen-core - Astarte interface tables for the device library
//!
//! This crate turns a directory of Astarte interface JSON schemas into a C
//! header and source pair declaring one constant `astarte_interface_t` per
//! interface:
//! - [`loader`] reads and validates schema files
//! - [`interface`] holds the validated [`Interface`] model
//! - [`render`] produces the two documents
//! - [`writer`] replaces both output files together
//!
//! # Example
//!
//! ```no_run
//! use astarte_gen_core::{GeneratorConfig, generate};
//!
//! let config = GeneratorConfig {
//!     interfaces_dir: "interfaces".into(),
//!     header_dir: "main/include".into(),
//!     source_dir: "main/src".into(),
//!     ..GeneratorConfig::default()
//! };
//!
//! let report = generate(&config)?;
//! println!("{} interfaces", report.interfaces.len());
//! # Ok::<(), astarte_gen_core::GenError>(())
//! ```

mod config;
mod error;

pub mod interface;
pub mod loader;
pub mod naming;
pub mod render;
pub mod writer;

pub use config::{DEFAULT_LICENSE_BANNER, GeneratorConfig};
pub use error::{GenError, GenResult};
pub use interface::{
    Aggregation, Interface, InterfaceType, Mapping, MappingType, Ownership, Reliability,
};
pub use render::{RenderedOutput, Renderer};

use std::path::PathBuf;
use writer::OutputFile;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Interface names, in output order
    pub interfaces: Vec<String>,
    pub header_path: PathBuf,
    pub source_path: PathBuf,
}

/// Load and render every interface of the configured directory.
///
/// Nothing is written.
pub fn render_directory(config: &GeneratorConfig) -> GenResult<(Vec<Interface>, RenderedOutput)> {
    config.validate()?;

    let interfaces: Vec<Interface> =
        loader::load_directory(&config.interfaces_dir, &config.schema_extension)?
            .into_iter()
            .map(|loaded| loaded.interface)
            .collect();

    let output = Renderer::new(config).render(&interfaces);
    Ok((interfaces, output))
}

/// Run the full pipeline: load, render, then write both documents.
pub fn generate(config: &GeneratorConfig) -> GenResult<GenerationReport> {
    let (interfaces, output) = render_directory(config)?;
    let report = build_report(config, &interfaces);

    writer::write_outputs(&[
        OutputFile::new(&report.header_path, &output.header),
        OutputFile::new(&report.source_path, &output.source),
    ])?;

    tracing::info!(
        "Generated {} interface(s) from {}",
        report.interfaces.len(),
        config.interfaces_dir.display()
    );

    Ok(report)
}

/// Render in memory and verify the files on disk match.
///
/// Returns [`GenError::Stale`] for the first output that is missing or differs.
pub fn check(config: &GeneratorConfig) -> GenResult<GenerationReport> {
    let (interfaces, output) = render_directory(config)?;
    let report = build_report(config, &interfaces);

    writer::check_outputs(&[
        OutputFile::new(&report.header_path, &output.header),
        OutputFile::new(&report.source_path, &output.source),
    ])?;

    tracing::info!(
        "{} interface(s) up to date in {} and {}",
        report.interfaces.len(),
        report.header_path.display(),
        report.source_path.display()
    );

    Ok(report)
}

fn build_report(config: &GeneratorConfig, interfaces: &[Interface]) -> GenerationReport {
    GenerationReport {
        interfaces: interfaces.iter().map(|i| i.name.clone()).collect(),
        header_path: config.header_path(),
        source_path: config.source_path(),
    }
}
