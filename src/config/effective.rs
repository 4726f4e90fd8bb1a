//! Effective configuration after merging CLI and config file.

use super::error::ConfigError;
use super::types::Config;
use crate::cli::{Cli, OutputFormat};
use std::path::PathBuf;

/// Settings for one run after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub directory: PathBuf,
    pub formats: Vec<OutputFormat>,
    pub output: Option<PathBuf>,
    pub recursive: bool,
    pub verbose: bool,
    pub exclude: Vec<String>,
}

impl EffectiveConfig {
    /// Merge CLI options with config file settings.
    ///
    /// - Boolean flags: CLI OR config (either can enable)
    /// - Formats and output path: CLI takes precedence, fallback to config
    /// - Exclude lists: union, config entries first
    pub fn from_cli_and_config(cli: &Cli, config: &Config) -> Result<Self, ConfigError> {
        let formats = if !cli.formats.is_empty() {
            cli.formats.clone()
        } else if !config.output.formats.is_empty() {
            config
                .output
                .formats
                .iter()
                .map(|f| {
                    f.parse::<OutputFormat>()
                        .map_err(|_| ConfigError::UnknownFormat(f.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            vec![OutputFormat::default()]
        };

        let output = cli
            .output
            .clone()
            .or_else(|| config.output.path.as_ref().map(PathBuf::from));

        let mut exclude = config.scan.exclude.clone();
        for name in &cli.exclude {
            if !exclude.contains(name) {
                exclude.push(name.clone());
            }
        }

        Ok(Self {
            directory: cli.directory.clone(),
            formats,
            output,
            recursive: cli.recursive || config.scan.recursive,
            verbose: cli.verbose || config.verbose,
            exclude,
        })
    }
}
