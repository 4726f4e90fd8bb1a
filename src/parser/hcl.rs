//! HCL native syntax parser (`.tf` files).

use super::traits::{ConfigParser, ModuleCall, line_of_offset};
use crate::error::{ParseFormat, Result, SbomError};
use hcl_edit::Span;
use hcl_edit::expr::Expression;
use hcl_edit::structure::{Block, Body};
use std::path::Path;

/// Parser for Terraform files in HCL native syntax.
pub struct HclParser;

impl HclParser {
    /// Create a new HCL parser.
    pub fn new() -> Self {
        Self
    }

    fn parse_body(content: &str, path: &Path) -> Result<Body> {
        hcl_edit::parser::parse_body(content).map_err(|e| SbomError::Parse {
            path: path.to_path_buf(),
            format: ParseFormat::Hcl,
            line: e.location().line(),
            column: e.location().column(),
            message: e.message().to_string(),
        })
    }

    fn module_call(block: &Block, content: &str, path: &Path) -> Result<Option<ModuleCall>> {
        // `module` without exactly one label is not a module call
        let [label] = block.labels.as_slice() else {
            return Ok(None);
        };

        let line = block
            .span()
            .map_or(1, |span| line_of_offset(content, span.start));
        let name = label.as_str().to_string();

        let mut call = ModuleCall::new(name, path, line);
        if let Some(source) = Self::string_attribute(block, "source", path, line)? {
            call = call.with_source(source);
        }
        if let Some(version) = Self::string_attribute(block, "version", path, line)? {
            call = call.with_version(version);
        }

        Ok(Some(call))
    }

    /// Read a literal string attribute from a module block.
    fn string_attribute(
        block: &Block,
        key: &str,
        path: &Path,
        line: usize,
    ) -> Result<Option<String>> {
        let Some(attr) = block.body.attributes().find(|a| a.has_key(key)) else {
            return Ok(None);
        };

        match &attr.value {
            Expression::String(value) => Ok(Some(value.value().clone())),
            _ => Err(SbomError::InvalidAttribute {
                path: path.to_path_buf(),
                line,
                module: block
                    .labels
                    .first()
                    .map(|l| l.as_str().to_string())
                    .unwrap_or_default(),
                attribute: key.to_string(),
                message: "a literal string is required; variables and templates are not allowed"
                    .to_string(),
            }),
        }
    }
}

impl Default for HclParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for HclParser {
    fn parse(&self, content: &str, path: &Path) -> Result<Vec<ModuleCall>> {
        let body = Self::parse_body(content, path)?;

        let mut calls = Vec::new();
        for block in body.blocks().filter(|b| b.has_ident("module")) {
            if let Some(call) = Self::module_call(block, content, path)? {
                calls.push(call);
            }
        }
        Ok(calls)
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".tf"]
    }
}
