use crate::error::Result;
use crate::reporter::{Reporter, to_pretty_json};
use crate::sbom::{Sbom, SpdxDocument};

/// SPDX 2.3 JSON document.
pub struct SpdxReporter;

impl SpdxReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SpdxReporter {
    fn report(&self, sbom: &Sbom) -> Result<String> {
        to_pretty_json(&SpdxDocument::from_sbom(sbom))
    }
}
