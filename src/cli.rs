use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// SBOM output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Xml,
    Csv,
    Tsv,
    /// SPDX 2.3 JSON
    Spdx,
    /// CycloneDX 1.6 JSON
    CycloneDx,
}

impl OutputFormat {
    /// Every supported format, in the order they are listed to users.
    pub const ALL: [OutputFormat; 6] = [
        Self::Json,
        Self::Xml,
        Self::Csv,
        Self::Tsv,
        Self::Spdx,
        Self::CycloneDx,
    ];

    /// Name used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Spdx => "spdx",
            Self::CycloneDx => "cyclonedx",
        }
    }

    /// File extension appended to the output path base.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Spdx => "spdx.json",
            Self::CycloneDx => "cyclonedx.json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "spdx" => Ok(Self::Spdx),
            "cyclonedx" | "cdx" => Ok(Self::CycloneDx),
            other => Err(format!(
                "unsupported format: {} (supported: json, xml, csv, tsv, spdx, cyclonedx)",
                other
            )),
        }
    }
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "terraform-sbom",
    version,
    about = "Generate a Software Bill of Materials for the modules used by a Terraform configuration",
    long_about = "terraform-sbom lists the module calls declared in Terraform configuration files and exports them as JSON, XML, CSV, TSV, SPDX or CycloneDX.",
    after_help = "Examples:\n  terraform-sbom -f json -o sbom.json ./terraform\n  terraform-sbom -r -f spdx -o sbom ./project    # Recursively scan all modules"
)]
pub struct Cli {
    /// Directory containing Terraform configuration files
    #[arg(value_name = "TERRAFORM_DIRECTORY")]
    pub directory: PathBuf,

    /// Output format(s), comma-separated: json, xml, csv, tsv, spdx, cyclonedx [default: json]
    #[arg(short, long = "format", value_delimiter = ',', value_parser = parse_output_format)]
    pub formats: Vec<OutputFormat>,

    /// Output file path base (extensions added automatically)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Recursively scan for Terraform modules
    #[arg(short, long)]
    pub recursive: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file (defaults to .terraform-sbom.yaml in the scanned directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory name to skip during a recursive scan (repeatable)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,
}
