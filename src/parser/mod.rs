//! Configuration parsing layer.
//!
//! This module provides parsers for both Terraform syntaxes:
//! - HCL native syntax (`.tf`)
//! - JSON syntax (`.tf.json`)
//!
//! Each parser implements the `ConfigParser` trait and extracts the
//! top-level `module` blocks. [`load_module`] combines the files of one
//! directory, applying override files.

pub mod hcl;
pub mod json;
pub mod loader;
pub mod traits;

pub use hcl::HclParser;
pub use json::JsonConfigParser;
pub use loader::load_module;
pub use traits::{ConfigParser, ModuleCall, SourcePos};

/// File name suffixes of Terraform configuration files.
pub const CONFIG_EXTENSIONS: &[&str] = &[".tf", ".tf.json"];

/// Check whether a file name denotes a Terraform configuration file.
pub fn is_config_file(name: &str) -> bool {
    CONFIG_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Check whether a configuration file name denotes an override file.
pub fn is_override_file(name: &str) -> bool {
    let stem = name
        .strip_suffix(".tf.json")
        .or_else(|| name.strip_suffix(".tf"));
    stem.is_some_and(|s| s == "override" || s.ends_with("_override"))
}

/// Registry of all available parsers.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn ConfigParser>>,
}

impl ParserRegistry {
    /// Create a new registry with all default parsers.
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(JsonConfigParser::new()), Box::new(HclParser::new())],
        }
    }

    /// Find a parser that can handle the given file name.
    pub fn parser_for(&self, file_name: &str) -> Option<&dyn ConfigParser> {
        self.parsers
            .iter()
            .find(|p| p.can_parse(file_name))
            .map(|p| p.as_ref())
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
