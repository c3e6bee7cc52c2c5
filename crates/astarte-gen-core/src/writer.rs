//! Output file writing.
//!
//! All outputs are staged into temporary files next to their targets and only
//! renamed into place once every one of them has been written, so a failure
//! while staging leaves all previous outputs untouched.

use crate::{GenError, GenResult};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// One document and the path it belongs at
#[derive(Debug, Clone, Copy)]
pub struct OutputFile<'a> {
    pub path: &'a Path,
    pub contents: &'a str,
}

impl<'a> OutputFile<'a> {
    pub fn new(path: &'a Path, contents: &'a str) -> Self {
        Self { path, contents }
    }
}

/// Write every output, replacing existing files.
///
/// Fails with [`GenError::Io`] before any target is replaced if a target
/// directory is missing or unwritable.
pub fn write_outputs(outputs: &[OutputFile<'_>]) -> GenResult<()> {
    let mut staged = Vec::with_capacity(outputs.len());
    for output in outputs {
        staged.push(stage(output)?);
    }

    for (temp, output) in staged.into_iter().zip(outputs) {
        temp.persist(output.path)
            .map_err(|e| GenError::io(output.path, e.error))?;
        tracing::info!(
            "Wrote {} ({} bytes)",
            output.path.display(),
            output.contents.len()
        );
    }

    Ok(())
}

/// Compare outputs with the files on disk.
///
/// A missing or differing file is reported as [`GenError::Stale`].
pub fn check_outputs(outputs: &[OutputFile<'_>]) -> GenResult<()> {
    for output in outputs {
        let current = match fs::read_to_string(output.path) {
            Ok(current) => current,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(GenError::Stale {
                    path: output.path.to_path_buf(),
                });
            }
            Err(e) => return Err(GenError::io(output.path, e)),
        };

        if current != output.contents {
            return Err(GenError::Stale {
                path: output.path.to_path_buf(),
            });
        }
        tracing::debug!("{} is up to date", output.path.display());
    }

    Ok(())
}

fn stage(output: &OutputFile<'_>) -> GenResult<NamedTempFile> {
    let dir = match output.path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| GenError::io(dir, e))?;
    temp.write_all(output.contents.as_bytes())
        .map_err(|e| GenError::io(output.path, e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| GenError::io(output.path, e))?;
    set_readable(&temp).map_err(|e| GenError::io(output.path, e))?;

    Ok(temp)
}

// Temporary files are created owner-only; generated sources are not secret.
#[cfg(unix)]
fn set_readable(temp: &NamedTempFile) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    temp.as_file()
        .set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_readable(_temp: &NamedTempFile) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "writer/writer_tests.rs"]
mod writer_tests;
