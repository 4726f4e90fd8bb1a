use crate::error::Result;
use crate::reporter::{Reporter, to_pretty_json};
use crate::sbom::Sbom;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, sbom: &Sbom) -> Result<String> {
        to_pretty_json(sbom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::fixtures::sample_sbom;

    #[test]
    fn test_json_output_structure() {
        let output = JsonReporter::new().report(&sample_sbom()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["version"], "1.0");
        assert_eq!(parsed["generated"], "2024-01-01T00:00:00Z");
        assert_eq!(parsed["tool"], "terraform-sbom");
        assert_eq!(parsed["modules"][0]["name"], "vpc");
        assert_eq!(parsed["modules"][0]["version"], "5.1.0");
        assert_eq!(
            parsed["modules"][1]["location"],
            "Module call at /infra/main.tf:6"
        );
        assert_eq!(parsed["modules"][1]["filename"], "main.tf");
    }

    #[test]
    fn test_json_is_indented_with_trailing_newline() {
        let output = JsonReporter::new().report(&sample_sbom()).unwrap();
        assert!(output.starts_with("{\n  \"version\": \"1.0\","));
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn test_json_empty_modules() {
        let sbom = Sbom::new(Vec::new());
        let output = JsonReporter::default().report(&sbom).unwrap();
        assert!(output.contains("\"modules\": []"));
    }
}
