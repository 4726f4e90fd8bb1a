//! SPDX 2.3 format support for SBOM generation.

use super::types::{ModuleInfo, Sbom, TOOL_NAME};
use serde::{Deserialize, Serialize};

const NOASSERTION: &str = "NOASSERTION";
const DOCUMENT_ID: &str = "SPDXRef-DOCUMENT";

/// SPDX 2.3 document structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxDocument {
    /// SPDX version (always "SPDX-2.3")
    pub spdx_version: String,

    /// Data license (CC0-1.0 for SPDX)
    pub data_license: String,

    /// SPDX identifier for the document
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,

    /// Document name
    pub name: String,

    /// Document namespace (unique URL)
    pub document_namespace: String,

    /// Creation information
    pub creation_info: CreationInfo,

    /// One package per module call
    pub packages: Vec<SpdxPackage>,

    /// Relationships between the document and its packages
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub relationships: Vec<Relationship>,
}

/// SPDX creation information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationInfo {
    /// Creation timestamp (ISO 8601)
    pub created: String,

    /// Tool(s) used to create the SPDX document
    pub creators: Vec<String>,
}

/// SPDX package representation of a module call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxPackage {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,

    pub name: String,

    /// Version constraint, NOASSERTION when undeclared
    pub version_info: String,

    /// Module source, NOASSERTION when undeclared
    pub download_location: String,

    pub files_analyzed: bool,

    pub copyright_text: String,

    pub primary_package_purpose: String,

    /// Where the module block was declared
    pub source_info: String,
}

/// SPDX relationship between elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub spdx_element_id: String,
    pub relationship_type: String,
    pub related_spdx_element: String,
}

fn or_noassertion(value: &str) -> String {
    if value.is_empty() {
        NOASSERTION.to_string()
    } else {
        value.to_string()
    }
}

impl SpdxDocument {
    /// Create a new SPDX document from an SBOM.
    pub fn from_sbom(sbom: &Sbom) -> Self {
        let uuid = uuid::Uuid::new_v4();

        let packages: Vec<SpdxPackage> = sbom
            .modules
            .iter()
            .enumerate()
            .map(|(i, m)| SpdxPackage::from_module(m, i))
            .collect();

        let relationships = packages
            .iter()
            .map(|p| Relationship {
                spdx_element_id: DOCUMENT_ID.to_string(),
                relationship_type: "DESCRIBES".to_string(),
                related_spdx_element: p.spdx_id.clone(),
            })
            .collect();

        Self {
            spdx_version: "SPDX-2.3".to_string(),
            data_license: "CC0-1.0".to_string(),
            spdx_id: DOCUMENT_ID.to_string(),
            name: "Terraform Configuration SBOM".to_string(),
            document_namespace: format!("https://terraform-sbom.local/{}", uuid),
            creation_info: CreationInfo {
                created: sbom.generated.clone(),
                creators: vec![format!("Tool: {}-{}", TOOL_NAME, env!("CARGO_PKG_VERSION"))],
            },
            packages,
            relationships,
        }
    }
}

impl SpdxPackage {
    fn from_module(module: &ModuleInfo, index: usize) -> Self {
        Self {
            spdx_id: format!("SPDXRef-Package-{}", index),
            name: module.name.clone(),
            version_info: or_noassertion(&module.version),
            download_location: or_noassertion(&module.source),
            files_analyzed: false,
            copyright_text: NOASSERTION.to_string(),
            primary_package_purpose: "LIBRARY".to_string(),
            source_info: module.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str, source: &str, version: &str) -> ModuleInfo {
        ModuleInfo {
            name: name.to_string(),
            source: source.to_string(),
            version: version.to_string(),
            location: "Module call at /infra/main.tf:1".to_string(),
            filename: "main.tf".to_string(),
        }
    }

    #[test]
    fn test_spdx_document_from_sbom() {
        let sbom = Sbom::new(vec![
            module("vpc", "terraform-aws-modules/vpc/aws", "5.1.0"),
            module("local", "./modules/local", ""),
        ])
        .with_generated("2024-01-01T00:00:00Z");

        let doc = SpdxDocument::from_sbom(&sbom);

        assert_eq!(doc.spdx_version, "SPDX-2.3");
        assert_eq!(doc.data_license, "CC0-1.0");
        assert_eq!(doc.spdx_id, "SPDXRef-DOCUMENT");
        assert_eq!(doc.name, "Terraform Configuration SBOM");
        assert!(
            doc.document_namespace
                .starts_with("https://terraform-sbom.local/")
        );
        assert_eq!(doc.creation_info.created, "2024-01-01T00:00:00Z");
        assert!(doc.creation_info.creators[0].starts_with("Tool: terraform-sbom-"));

        assert_eq!(doc.packages.len(), 2);
        assert_eq!(doc.packages[0].spdx_id, "SPDXRef-Package-0");
        assert_eq!(doc.packages[0].version_info, "5.1.0");
        assert_eq!(
            doc.packages[0].download_location,
            "terraform-aws-modules/vpc/aws"
        );
        assert_eq!(doc.packages[1].spdx_id, "SPDXRef-Package-1");
        assert_eq!(doc.packages[1].version_info, "NOASSERTION");
    }

    #[test]
    fn test_spdx_relationships() {
        let sbom = Sbom::new(vec![module("a", "./a", ""), module("b", "./b", "")]);
        let doc = SpdxDocument::from_sbom(&sbom);

        assert_eq!(doc.relationships.len(), 2);
        assert!(doc.relationships.iter().all(|r| {
            r.spdx_element_id == "SPDXRef-DOCUMENT" && r.relationship_type == "DESCRIBES"
        }));
        assert_eq!(doc.relationships[1].related_spdx_element, "SPDXRef-Package-1");
    }

    #[test]
    fn test_spdx_package_without_source() {
        let package = SpdxPackage::from_module(&module("bare", "", ""), 0);

        assert_eq!(package.download_location, "NOASSERTION");
        assert_eq!(package.copyright_text, "NOASSERTION");
        assert_eq!(package.primary_package_purpose, "LIBRARY");
        assert!(!package.files_analyzed);
        assert_eq!(package.source_info, "Module call at /infra/main.tf:1");
    }

    #[test]
    fn test_spdx_serialization() {
        let sbom = Sbom::new(vec![module("vpc", "terraform-aws-modules/vpc/aws", "")]);
        let doc = SpdxDocument::from_sbom(&sbom);

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["spdxVersion"], "SPDX-2.3");
        assert_eq!(value["SPDXID"], "SPDXRef-DOCUMENT");
        assert_eq!(value["packages"][0]["SPDXID"], "SPDXRef-Package-0");
        assert_eq!(value["packages"][0]["versionInfo"], "NOASSERTION");
        assert_eq!(value["packages"][0]["filesAnalyzed"], false);
        assert_eq!(value["relationships"][0]["relationshipType"], "DESCRIBES");
    }

    #[test]
    fn test_spdx_empty_sbom() {
        let doc = SpdxDocument::from_sbom(&Sbom::new(Vec::new()));
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["packages"], serde_json::json!([]));
        assert!(value.get("relationships").is_none());
    }
}
