//! Output formatter for SBOMs.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::reporter::{
    CycloneDxReporter, DelimitedReporter, JsonReporter, Reporter, SpdxReporter, XmlReporter,
};
use crate::sbom::Sbom;

/// Unified output formatter that selects the appropriate reporter.
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new output formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Encode the SBOM.
    pub fn format(&self, sbom: &Sbom) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::new().report(sbom),
            OutputFormat::Xml => XmlReporter::new().report(sbom),
            OutputFormat::Csv => DelimitedReporter::csv().report(sbom),
            OutputFormat::Tsv => DelimitedReporter::tsv().report(sbom),
            OutputFormat::Spdx => SpdxReporter::new().report(sbom),
            OutputFormat::CycloneDx => CycloneDxReporter::new().report(sbom),
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Json)
    }
}
