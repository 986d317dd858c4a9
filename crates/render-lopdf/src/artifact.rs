//! Atomic persistence of encoded documents.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use angebot_render_core::RenderError;
use tempfile::NamedTempFile;

/// Write `bytes` to `dir/file_name` atomically.
///
/// The bytes go to a temporary file in the same directory first and
/// are renamed into place, so a crash mid-write never leaves a partial
/// document at the final path.
pub fn write_artifact(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, RenderError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(&path).map_err(|e| RenderError::Io(e.error))?;

    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}
