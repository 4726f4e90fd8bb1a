//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Main configuration structure for terraform-sbom.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanning options.
    pub scan: ScanConfig,
    /// Output options.
    pub output: OutputConfig,
    /// Verbose output.
    pub verbose: bool,
}

/// Directory scanning configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Walk subdirectories of the configuration path.
    pub recursive: bool,
    /// Directory names skipped during a recursive walk, in addition to
    /// hidden directories.
    pub exclude: Vec<String>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output formats: "json", "xml", "csv", "tsv", "spdx", "cyclonedx".
    pub formats: Vec<String>,
    /// Output path base; the extension is replaced per format.
    pub path: Option<String>,
}
