//! Schema loading.
//!
//! Reads every schema file of a directory, in file-name order, and turns each
//! into a validated [`Interface`]. Cross-file name and symbol uniqueness is
//! checked once all files are loaded.

use crate::interface::{Interface, RawInterface};
use crate::{GenError, GenResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// An interface together with the file it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedInterface {
    pub path: PathBuf,
    pub interface: Interface,
}

/// Parse one schema document.
///
/// `path` is only used to label errors.
pub fn parse_interface(content: &str, path: &Path) -> GenResult<Interface> {
    let raw: RawInterface = serde_json::from_str(content).map_err(|source| GenError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Interface::from_raw(raw, &path.display().to_string())
}

/// Read and parse one schema file
pub fn load_file(path: &Path) -> GenResult<LoadedInterface> {
    let content = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
    let interface = parse_interface(&content, path)?;

    tracing::debug!(
        "Loaded interface {} v{}.{} ({} mappings) from {}",
        interface.name,
        interface.version_major,
        interface.version_minor,
        interface.mappings.len(),
        path.display()
    );

    Ok(LoadedInterface {
        path: path.to_path_buf(),
        interface,
    })
}

/// List the schema files of a directory, sorted by file name.
///
/// Subdirectories are not traversed.
pub fn schema_files(dir: &Path, extension: &str) -> GenResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| GenError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| GenError::io(dir, e))?.path();
        let matches_extension = path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == extension);
        if matches_extension && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Load every schema file of a directory.
///
/// Fails on the first unreadable or invalid file, then on any duplicate
/// interface name or derived symbol across files.
pub fn load_directory(dir: &Path, extension: &str) -> GenResult<Vec<LoadedInterface>> {
    let files = schema_files(dir, extension)?;

    if files.is_empty() {
        tracing::warn!(
            "No .{} schema files found in {}",
            extension,
            dir.display()
        );
    }

    let loaded = files
        .iter()
        .map(|path| load_file(path))
        .collect::<GenResult<Vec<_>>>()?;

    check_unique(&loaded)?;

    Ok(loaded)
}

/// Reject duplicate interface names and colliding symbol suffixes
pub fn check_unique(loaded: &[LoadedInterface]) -> GenResult<()> {
    let mut names: HashMap<&str, &Path> = HashMap::new();
    let mut symbols: HashMap<String, &str> = HashMap::new();

    for entry in loaded {
        let name = entry.interface.name.as_str();

        if let Some(first) = names.insert(name, &entry.path) {
            return Err(GenError::DuplicateName {
                name: name.to_string(),
                first: first.to_path_buf(),
                second: entry.path.clone(),
            });
        }

        let symbol = entry.interface.symbol_suffix();
        if let Some(first) = symbols.get(&symbol) {
            return Err(GenError::DuplicateSymbol {
                symbol,
                first: (*first).to_string(),
                second: name.to_string(),
            });
        }
        symbols.insert(symbol, name);
    }

    Ok(())
}

#[cfg(test)]
#[path = "loader/loader_tests.rs"]
mod loader_tests;
