//! Parser traits and the module-call record they produce.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Position of a module block in its source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePos {
    /// Path of the file holding the block, as it was read.
    pub filename: PathBuf,
    /// 1-based line of the block's first token.
    pub line: usize,
}

/// A `module` block as declared in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCall {
    pub name: String,
    /// Empty when the block has no `source` attribute.
    pub source: String,
    /// Empty when the block has no `version` attribute.
    pub version: String,
    pub pos: SourcePos,
}

impl ModuleCall {
    /// Create a module call without source or version.
    pub fn new(name: impl Into<String>, filename: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            name: name.into(),
            source: String::new(),
            version: String::new(),
            pos: SourcePos {
                filename: filename.into(),
                line,
            },
        }
    }

    /// Set the source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the version constraint.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Trait for configuration file parsers.
///
/// Each parser handles one Terraform syntax and extracts the module
/// calls declared at the top level of a file.
pub trait ConfigParser: Send + Sync {
    /// Parse the file content.
    fn parse(&self, content: &str, path: &Path) -> Result<Vec<ModuleCall>>;

    /// Get the file name suffixes this parser supports.
    fn supported_extensions(&self) -> &[&str];

    /// Check if this parser can handle the given file name.
    fn can_parse(&self, file_name: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| file_name.ends_with(ext))
    }
}

/// Convert a byte offset into a 1-based line number.
pub(crate) fn line_of_offset(content: &str, offset: usize) -> usize {
    let end = offset.min(content.len());
    content.as_bytes()[..end]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_call_builder() {
        let call = ModuleCall::new("vpc", "/infra/main.tf", 3)
            .with_source("terraform-aws-modules/vpc/aws")
            .with_version("~> 5.0");

        assert_eq!(call.name, "vpc");
        assert_eq!(call.source, "terraform-aws-modules/vpc/aws");
        assert_eq!(call.version, "~> 5.0");
        assert_eq!(call.pos.filename, PathBuf::from("/infra/main.tf"));
        assert_eq!(call.pos.line, 3);
    }

    #[test]
    fn test_module_call_defaults_empty() {
        let call = ModuleCall::new("local", "main.tf", 1);
        assert!(call.source.is_empty());
        assert!(call.version.is_empty());
    }

    #[test]
    fn test_line_of_offset() {
        let content = "a\nbb\nccc\n";
        assert_eq!(line_of_offset(content, 0), 1);
        assert_eq!(line_of_offset(content, 2), 2);
        assert_eq!(line_of_offset(content, 5), 3);
        assert_eq!(line_of_offset(content, 1000), 4);
    }
}
