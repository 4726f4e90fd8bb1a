//! Output layer.
//!
//! This module turns an [`Sbom`] into files:
//! - format selection via [`OutputFormatter`]
//! - output file name derivation from an optional base path
//! - writing the encoded document to disk

pub mod formatter;

pub use formatter::OutputFormatter;

use crate::cli::OutputFormat;
use crate::error::{Result, SbomError};
use crate::sbom::Sbom;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File stem used when no output base is given.
pub const DEFAULT_BASE: &str = "sbom";

/// Derive the output file for `format`.
///
/// The last extension of `base` is replaced by the format's extension;
/// without a base the file is `sbom.<ext>` in the working directory.
/// A base that names a directory (`..`, `/`, a trailing separator) is
/// rejected.
pub fn output_filename(base: Option<&Path>, format: OutputFormat) -> Result<PathBuf> {
    let base = base.unwrap_or(Path::new(DEFAULT_BASE));
    if base.file_name().is_none() || base.to_string_lossy().ends_with(std::path::is_separator) {
        return Err(SbomError::InvalidOutputPath {
            path: base.to_path_buf(),
            message: "the output base must name a file".to_string(),
        });
    }
    Ok(base.with_extension(format.extension()))
}

/// Encode `sbom` and write it to `path`, creating or truncating the file.
pub fn export(sbom: &Sbom, format: OutputFormat, path: &Path) -> Result<()> {
    let content = OutputFormatter::new(format).format(sbom)?;
    fs::write(path, content).map_err(|e| SbomError::write_error(path, e))?;
    debug!(format = %format, path = %path.display(), "Exported SBOM");
    Ok(())
}
