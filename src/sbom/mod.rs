//! SBOM (Software Bill of Materials) generation module.
//!
//! This module builds the module inventory of a Terraform configuration
//! and maps it onto the SPDX and CycloneDX document models.

pub mod builder;
pub mod cyclonedx;
pub mod source;
pub mod spdx;
pub mod types;

pub use builder::SbomBuilder;
pub use cyclonedx::CycloneDxBom;
pub use source::SourceKind;
pub use spdx::SpdxDocument;
pub use types::{ModuleInfo, SBOM_VERSION, Sbom, TOOL_NAME};

use std::collections::BTreeMap;

impl Sbom {
    /// Count modules per source kind label.
    pub fn source_breakdown(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for module in &self.modules {
            *counts
                .entry(SourceKind::classify(&module.source).label())
                .or_insert(0) += 1;
        }
        counts
    }
}
