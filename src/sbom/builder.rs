//! SBOM builder: discovery plus per-directory loading.

use super::types::{ModuleInfo, Sbom};
use crate::discovery::{DirectoryWalker, WalkConfig, validate_directory};
use crate::error::{IoOperation, Result, SbomError};
use crate::parser::load_module;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// SBOM builder for a Terraform configuration tree.
#[derive(Debug, Clone, Default)]
pub struct SbomBuilder {
    /// Walk subdirectories
    recursive: bool,

    /// Directory names pruned from the walk
    exclude: Vec<String>,
}

impl SbomBuilder {
    /// Create a new SBOM builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether subdirectories are walked.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set directory names to skip during the walk.
    pub fn with_exclude(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }

    fn absolute(path: &Path) -> Result<PathBuf> {
        std::path::absolute(path).map_err(|source| SbomError::Io {
            path: path.to_path_buf(),
            operation: IoOperation::Resolve,
            source,
        })
    }

    /// Build an SBOM from every module declared under `path`.
    ///
    /// The first directory that fails to load aborts the build.
    pub fn build_from_path(&self, path: &Path) -> Result<Sbom> {
        validate_directory(path)?;
        let root = Self::absolute(path)?;

        let walker = DirectoryWalker::new(
            WalkConfig::new(self.recursive).with_exclude(self.exclude.iter().cloned()),
        );
        let dirs = walker.find_module_dirs(&root);
        debug!(root = %root.display(), directories = dirs.len(), "Discovered Terraform directories");

        let mut modules = Vec::new();
        for dir in &dirs {
            let calls = load_module(dir).map_err(|e| SbomError::module_load(dir, e))?;
            modules.extend(calls.iter().map(ModuleInfo::from_call));
        }

        info!(modules = modules.len(), "Built SBOM");
        Ok(Sbom::new(modules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("main.tf"),
            r#"module "vpc" {
  source  = "terraform-aws-modules/vpc/aws"
  version = "5.1.0"
}

module "local" {
  source = "./modules/local"
}
"#,
        )
        .unwrap();

        let local = dir.path().join("modules").join("local");
        fs::create_dir_all(&local).unwrap();
        fs::write(
            local.join("main.tf"),
            "module \"nested\" {\n  source = \"git::https://github.com/example/terraform-module.git\"\n}\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_build_non_recursive() {
        let dir = create_project();
        let sbom = SbomBuilder::new().build_from_path(dir.path()).unwrap();

        assert_eq!(sbom.len(), 2);
        assert_eq!(sbom.modules[0].name, "vpc");
        assert_eq!(sbom.modules[0].version, "5.1.0");
        assert_eq!(sbom.modules[0].filename, "main.tf");
        assert_eq!(sbom.modules[1].name, "local");
        assert!(sbom.modules[1].version.is_empty());
    }

    #[test]
    fn test_build_recursive() {
        let dir = create_project();
        let sbom = SbomBuilder::new()
            .with_recursive(true)
            .build_from_path(dir.path())
            .unwrap();

        let names: Vec<_> = sbom.modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["vpc", "local", "nested"]);
    }

    #[test]
    fn test_build_recursive_with_exclude() {
        let dir = create_project();
        let sbom = SbomBuilder::new()
            .with_recursive(true)
            .with_exclude(["modules"])
            .build_from_path(dir.path())
            .unwrap();

        assert_eq!(sbom.len(), 2);
    }

    #[test]
    fn test_location_uses_absolute_path() {
        let dir = create_project();
        let sbom = SbomBuilder::new().build_from_path(dir.path()).unwrap();

        let expected = format!("Module call at {}:1", dir.path().join("main.tf").display());
        assert_eq!(sbom.modules[0].location, expected);
        assert_eq!(sbom.modules[1].location.rsplit(':').next(), Some("6"));
    }

    #[test]
    fn test_build_empty_directory() {
        let dir = TempDir::new().unwrap();
        let sbom = SbomBuilder::new().build_from_path(dir.path()).unwrap();
        assert!(sbom.is_empty());
    }

    #[test]
    fn test_build_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = SbomBuilder::new().build_from_path(&missing).unwrap_err();
        assert!(matches!(err, SbomError::PathNotFound(_)));
        assert!(err.to_string().starts_with("path does not exist: "));
    }

    #[test]
    fn test_build_file_path() {
        let dir = create_project();
        let err = SbomBuilder::new()
            .build_from_path(&dir.path().join("main.tf"))
            .unwrap_err();
        assert!(matches!(err, SbomError::NotADirectory(_)));
    }

    #[test]
    fn test_build_parse_error_names_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.tf"), "module \"broken\" {\n  source = \n").unwrap();

        let err = SbomBuilder::new().build_from_path(dir.path()).unwrap_err();
        assert!(matches!(err, SbomError::ModuleLoad { .. }));
        assert!(
            err.to_string()
                .starts_with("failed to load Terraform module from ")
        );
    }
}
