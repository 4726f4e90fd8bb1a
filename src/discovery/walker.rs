//! Directory walking for Terraform configuration discovery.

use crate::error::{Result, SbomError};
use crate::parser::is_config_file;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Directory names skipped along with their subtrees.
    pub exclude: Vec<String>,
}

impl WalkConfig {
    /// Create a new WalkConfig.
    pub fn new(recursive: bool) -> Self {
        Self {
            recursive,
            ..Default::default()
        }
    }

    /// Set directory names to skip.
    pub fn with_exclude(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Check whether `dir` directly contains a Terraform configuration file.
///
/// Directories that cannot be read count as having none.
pub fn has_terraform_files(dir: &Path) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };

    entries.filter_map(|e| e.ok()).any(|entry| {
        entry.file_type().is_ok_and(|t| !t.is_dir())
            && entry
                .file_name()
                .to_str()
                .is_some_and(is_config_file)
    })
}

/// Check that `path` exists and is a directory.
pub fn validate_directory(path: &Path) -> Result<()> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SbomError::PathNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(SbomError::read_error(path, e)),
    };

    if !metadata.is_dir() {
        return Err(SbomError::NotADirectory(path.to_path_buf()));
    }

    Ok(())
}

/// Directory walker yielding every directory that holds Terraform files.
pub struct DirectoryWalker {
    config: WalkConfig,
}

impl DirectoryWalker {
    /// Create a new DirectoryWalker with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Hidden and excluded directories are pruned, the root never is.
    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let Some(name) = entry.file_name().to_str() else {
            return false;
        };
        name.starts_with('.') || self.config.exclude.iter().any(|e| e == name)
    }

    /// Find the directories under `root` to load, in lexical walk order.
    ///
    /// Symbolic links are not followed.
    pub fn find_module_dirs(&self, root: &Path) -> Vec<PathBuf> {
        if !self.config.recursive {
            return if has_terraform_files(root) {
                vec![root.to_path_buf()]
            } else {
                Vec::new()
            };
        }

        let walker = WalkDir::new(root).sort_by_file_name();

        let mut dirs = Vec::new();
        for entry in walker.into_iter().filter_entry(|e| !self.is_pruned(e)) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    warn!("skipping {} due to error: {}", path, e);
                    continue;
                }
            };

            if entry.file_type().is_dir() && has_terraform_files(entry.path()) {
                debug!(dir = %entry.path().display(), "Found Terraform directory");
                dirs.push(entry.into_path());
            }
        }

        dirs
    }
}
