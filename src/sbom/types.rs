//! SBOM record types.

use crate::parser::ModuleCall;
use serde::{Deserialize, Serialize};

/// SBOM format version tag.
pub const SBOM_VERSION: &str = "1.0";

/// Name recorded as the generating tool.
pub const TOOL_NAME: &str = "terraform-sbom";

/// One module reference found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Module block label.
    pub name: String,

    /// Source address, empty when not declared.
    pub source: String,

    /// Version constraint, empty when not declared.
    pub version: String,

    /// Human readable position, `Module call at <path>:<line>`.
    pub location: String,

    /// Base name of the declaring file.
    pub filename: String,
}

impl ModuleInfo {
    /// Flatten a parsed module call into an SBOM record.
    pub fn from_call(call: &ModuleCall) -> Self {
        let filename = call
            .pos
            .filename
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            name: call.name.clone(),
            source: call.source.clone(),
            version: call.version.clone(),
            location: format!(
                "Module call at {}:{}",
                call.pos.filename.display(),
                call.pos.line
            ),
            filename,
        }
    }
}

/// The bill of materials for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sbom {
    /// Format version tag (always "1.0").
    pub version: String,

    /// Generation time, RFC 3339 UTC.
    pub generated: String,

    /// Generating tool name.
    pub tool: String,

    /// Modules in discovery order.
    pub modules: Vec<ModuleInfo>,
}

impl Sbom {
    /// Create an SBOM stamped with the current time.
    pub fn new(modules: Vec<ModuleInfo>) -> Self {
        Self {
            version: SBOM_VERSION.to_string(),
            generated: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            tool: TOOL_NAME.to_string(),
            modules,
        }
    }

    /// Override the generation timestamp.
    pub fn with_generated(mut self, generated: impl Into<String>) -> Self {
        self.generated = generated.into();
        self
    }

    /// Number of modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no modules were found.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
