//! SBOM encoders, one per output format.

pub mod cyclonedx;
pub mod delimited;
pub mod json;
pub mod spdx;
pub mod xml;

use crate::error::Result;
use crate::sbom::Sbom;

pub use cyclonedx::CycloneDxReporter;
pub use delimited::DelimitedReporter;
pub use json::JsonReporter;
pub use spdx::SpdxReporter;
pub use xml::XmlReporter;

pub trait Reporter {
    fn report(&self, sbom: &Sbom) -> Result<String>;
}

/// Pretty-print a serializable document as JSON with a trailing newline.
pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}
