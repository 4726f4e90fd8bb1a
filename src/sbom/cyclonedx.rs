//! CycloneDX 1.6 SBOM output format.

use super::source::SourceKind;
use super::types::{ModuleInfo, Sbom, TOOL_NAME};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// CycloneDX 1.6 BOM structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycloneDxBom {
    /// BOM format (always "CycloneDX")
    pub bom_format: String,

    /// Spec version
    pub spec_version: String,

    /// Serial number (UUID)
    pub serial_number: String,

    /// BOM version
    pub version: i32,

    /// Metadata about the BOM
    pub metadata: CycloneDxMetadata,

    /// One library component per module call
    pub components: Vec<CycloneDxComponent>,
}

/// Metadata about the BOM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycloneDxMetadata {
    /// Timestamp of generation
    pub timestamp: String,

    /// Tools used to generate the BOM
    pub tools: Vec<CycloneDxTool>,
}

/// Tool information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycloneDxTool {
    pub vendor: String,
    pub name: String,
    pub version: String,
}

/// A component in the CycloneDX BOM.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycloneDxComponent {
    /// Component type
    #[serde(rename = "type")]
    pub component_type: String,

    /// BOM reference (unique ID)
    #[serde(rename = "bom-ref")]
    pub bom_ref: String,

    /// Component name
    pub name: String,

    /// Version constraint, omitted when undeclared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Publisher namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// External references
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub external_references: Vec<CycloneDxExternalRef>,

    /// Name/value properties
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub properties: Vec<CycloneDxProperty>,
}

/// External reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycloneDxExternalRef {
    /// Reference type
    #[serde(rename = "type")]
    pub ref_type: String,

    /// URL
    pub url: String,
}

/// Component property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycloneDxProperty {
    pub name: String,
    pub value: String,
}

impl CycloneDxBom {
    /// Create a new BOM from an SBOM.
    pub fn from_sbom(sbom: &Sbom) -> Self {
        let components = sbom
            .modules
            .iter()
            .enumerate()
            .map(|(i, m)| CycloneDxComponent::from_module(m, i))
            .collect();

        Self {
            bom_format: "CycloneDX".to_string(),
            spec_version: "1.6".to_string(),
            serial_number: format!("urn:uuid:{}", Uuid::new_v4()),
            version: 1,
            metadata: CycloneDxMetadata {
                timestamp: sbom.generated.clone(),
                tools: vec![CycloneDxTool {
                    vendor: TOOL_NAME.to_string(),
                    name: TOOL_NAME.to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                }],
            },
            components,
        }
    }
}

/// Registry namespace, or the first path segment of any other
/// non-local source.
fn group_of(source: &str, kind: &SourceKind) -> Option<String> {
    if let Some(namespace) = kind.registry_namespace() {
        return Some(namespace.to_string());
    }
    match kind {
        SourceKind::Local => None,
        _ => source
            .split('/')
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    }
}

impl CycloneDxComponent {
    /// Create from a module record.
    fn from_module(module: &ModuleInfo, index: usize) -> Self {
        let version = (!module.version.is_empty()).then(|| module.version.clone());
        let bom_ref = format!(
            "{}@{}#{}",
            module.name,
            version.as_deref().unwrap_or("unversioned"),
            index
        );

        let kind = SourceKind::classify(&module.source);

        let mut external_refs = Vec::new();
        if kind.is_vcs() {
            external_refs.push(CycloneDxExternalRef {
                ref_type: "vcs".to_string(),
                url: module.source.clone(),
            });
        } else if kind.is_archive() {
            external_refs.push(CycloneDxExternalRef {
                ref_type: "distribution".to_string(),
                url: module.source.clone(),
            });
        }

        Self {
            component_type: "library".to_string(),
            bom_ref,
            name: module.name.clone(),
            version,
            group: group_of(&module.source, &kind),
            external_references: external_refs,
            properties: vec![CycloneDxProperty {
                name: "terraform:location".to_string(),
                value: module.location.clone(),
            }],
        }
    }
}
