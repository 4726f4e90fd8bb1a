use crate::error::{Result, SbomError};
use crate::reporter::Reporter;
use crate::sbom::Sbom;

const HEADER: [&str; 4] = ["Name", "Source", "Version", "Location"];

/// Comma or tab separated table of modules.
pub struct DelimitedReporter {
    delimiter: u8,
}

impl DelimitedReporter {
    pub fn csv() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl Reporter for DelimitedReporter {
    fn report(&self, sbom: &Sbom) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(HEADER)?;
        for module in &sbom.modules {
            writer.write_record([
                &module.name,
                &module.source,
                &module.version,
                &module.location,
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SbomError::Csv(e.into_error().into()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
