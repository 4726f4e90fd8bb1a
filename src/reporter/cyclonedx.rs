use crate::error::Result;
use crate::reporter::{Reporter, to_pretty_json};
use crate::sbom::{CycloneDxBom, Sbom};

/// CycloneDX 1.6 JSON document.
pub struct CycloneDxReporter;

impl CycloneDxReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for CycloneDxReporter {
    fn report(&self, sbom: &Sbom) -> Result<String> {
        to_pretty_json(&CycloneDxBom::from_sbom(sbom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::fixtures::sample_sbom;

    #[test]
    fn test_cyclonedx_output() {
        let output = CycloneDxReporter::new().report(&sample_sbom()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["bomFormat"], "CycloneDX");
        assert_eq!(parsed["specVersion"], "1.6");
        assert_eq!(parsed["metadata"]["timestamp"], "2024-01-01T00:00:00Z");
        assert_eq!(parsed["components"][0]["bom-ref"], "vpc@5.1.0#0");
        assert_eq!(parsed["components"][0]["group"], "terraform-aws-modules");
        assert_eq!(parsed["components"][1]["bom-ref"], "local@unversioned#1");
        assert!(output.ends_with("}\n"));
    }
}
