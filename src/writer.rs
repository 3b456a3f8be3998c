//! Persist generated declarations to `<dir>/<name>.ts`.

use crate::error::{Api2tsError, Result};
use crate::paths::output_file;
use crate::synth::GeneratedType;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `generated` into `dir`, creating the directory if needed.
///
/// An existing file with the same name is overwritten. Returns the path of
/// the written file.
pub fn write_types(dir: &Path, generated: &GeneratedType) -> Result<PathBuf> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "creating output directory");
        fs::create_dir_all(dir).map_err(|e| Api2tsError::write(dir, e))?;
    }

    let path = output_file(dir, generated.name());
    fs::write(&path, generated.source()).map_err(|e| Api2tsError::write(&path, e))?;
    debug!(path = %path.display(), lines = generated.lines().len(), "wrote type file");
    Ok(path)
}
