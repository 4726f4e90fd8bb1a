use crate::error::Result;
use crate::reporter::Reporter;
use crate::sbom::{ModuleInfo, Sbom};
use serde::Serialize;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Serialize)]
#[serde(rename = "SBOM")]
struct XmlSbom<'a> {
    #[serde(rename = "@version")]
    version: &'a str,
    #[serde(rename = "@generated")]
    generated: &'a str,
    #[serde(rename = "@tool")]
    tool: &'a str,
    #[serde(rename = "Modules")]
    modules: XmlModules<'a>,
}

#[derive(Serialize)]
struct XmlModules<'a> {
    #[serde(rename = "Module")]
    module: &'a [ModuleInfo],
}

pub struct XmlReporter;

impl XmlReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for XmlReporter {
    fn report(&self, sbom: &Sbom) -> Result<String> {
        let document = XmlSbom {
            version: &sbom.version,
            generated: &sbom.generated,
            tool: &sbom.tool,
            modules: XmlModules {
                module: &sbom.modules,
            },
        };

        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut body);
        serializer.indent(' ', 2);
        document.serialize(serializer)?;

        Ok(format!("{}\n{}\n", XML_DECLARATION, body))
    }
}
