//! Error types for terraform-sbom.
//!
//! `SbomError` covers every failure from path validation through module
//! loading to export. Context types live in [`context`].

mod context;

pub use context::{IoOperation, ParseFormat};

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all terraform-sbom operations.
#[derive(Error, Debug)]
pub enum SbomError {
    /// The configuration path does not exist.
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The configuration path is not a directory.
    #[error("path must be a directory containing Terraform files: {}", .0.display())]
    NotADirectory(PathBuf),

    /// I/O operation failed.
    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        path: PathBuf,
        operation: IoOperation,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file syntax error.
    #[error("Failed to parse {format} in {}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        format: ParseFormat,
        line: usize,
        column: usize,
        message: String,
    },

    /// A module attribute is present but not usable.
    #[error(
        "Invalid \"{attribute}\" for module \"{module}\" at {}:{line}: {message}",
        path.display()
    )]
    InvalidAttribute {
        path: PathBuf,
        line: usize,
        module: String,
        attribute: String,
        message: String,
    },

    /// The same module name is declared twice in one directory.
    #[error("Duplicate module call \"{name}\" at {}:{line}", path.display())]
    DuplicateModule {
        name: String,
        path: PathBuf,
        line: usize,
    },

    /// An override file refers to a module that no primary file declares.
    #[error(
        "Override for undeclared module call \"{name}\" at {}:{line}",
        path.display()
    )]
    UnknownOverride {
        name: String,
        path: PathBuf,
        line: usize,
    },

    /// The output base cannot name a file.
    #[error("invalid output path {}: {message}", path.display())]
    InvalidOutputPath { path: PathBuf, message: String },

    /// Loading a Terraform directory failed.
    #[error("failed to load Terraform module from {}: {source}", dir.display())]
    ModuleLoad {
        dir: PathBuf,
        #[source]
        source: Box<SbomError>,
    },

    /// JSON encoding error.
    #[error("failed to encode SBOM as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// XML encoding error.
    #[error("failed to encode SBOM as XML: {0}")]
    Xml(#[from] quick_xml::SeError),

    /// CSV/TSV encoding error.
    #[error("failed to write delimited records: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SbomError {
    /// Create an I/O read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Read,
            source,
        }
    }

    /// Create an I/O write error.
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Write,
            source,
        }
    }

    /// Create an I/O error for a failed directory listing.
    pub fn list_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::List,
            source,
        }
    }

    /// Wrap an error raised while loading `dir`.
    pub fn module_load(dir: impl Into<PathBuf>, source: SbomError) -> Self {
        Self::ModuleLoad {
            dir: dir.into(),
            source: Box::new(source),
        }
    }
}

/// Result type alias for terraform-sbom operations.
pub type Result<T> = std::result::Result<T, SbomError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_path_not_found() {
        let err = SbomError::PathNotFound(PathBuf::from("/path/that/does/not/exist"));
        assert_eq!(
            err.to_string(),
            "path does not exist: /path/that/does/not/exist"
        );
    }

    #[test]
    fn test_error_display_not_a_directory() {
        let err = SbomError::NotADirectory(PathBuf::from("/tmp/main.tf"));
        assert_eq!(
            err.to_string(),
            "path must be a directory containing Terraform files: /tmp/main.tf"
        );
    }

    #[test]
    fn test_read_error() {
        let err = SbomError::read_error(
            "/path/to/main.tf",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("/path/to/main.tf"));
        assert!(err.to_string().contains("read"));
    }

    #[test]
    fn test_write_error() {
        let err = SbomError::write_error(
            "/out/sbom.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("Failed to write /out/sbom.json"));
    }

    #[test]
    fn test_error_display_parse() {
        let err = SbomError::Parse {
            path: PathBuf::from("main.tf"),
            format: ParseFormat::Hcl,
            line: 3,
            column: 7,
            message: "expected `}`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse HCL in main.tf:3:7: expected `}`"
        );
    }

    #[test]
    fn test_error_display_duplicate_module() {
        let err = SbomError::DuplicateModule {
            name: "vpc".to_string(),
            path: PathBuf::from("network.tf"),
            line: 12,
        };
        assert_eq!(
            err.to_string(),
            "Duplicate module call \"vpc\" at network.tf:12"
        );
    }

    #[test]
    fn test_invalid_output_path_display() {
        let err = SbomError::InvalidOutputPath {
            path: PathBuf::from("out/"),
            message: "the output base must name a file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid output path out/: the output base must name a file"
        );
    }

    #[test]
    fn test_module_load_wraps_cause() {
        let inner = SbomError::DuplicateModule {
            name: "vpc".to_string(),
            path: PathBuf::from("network.tf"),
            line: 12,
        };
        let err = SbomError::module_load("/infra", inner);
        assert!(
            err.to_string()
                .starts_with("failed to load Terraform module from /infra:")
        );
        assert!(err.to_string().contains("Duplicate module call"));
    }
}
