//! SBOM generation handler.

use super::HandlerResult;
use crate::cli::Cli;
use crate::config::{Config, EffectiveConfig};
use crate::error::Result;
use crate::logging;
use crate::output::{export, output_filename};
use crate::sbom::SbomBuilder;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Ok(Config::from_file(path)?),
        None => Ok(Config::load(Some(cli.directory.as_path()))),
    }
}

fn format_list(effective: &EffectiveConfig) -> String {
    effective
        .formats
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate and export the SBOM, returning the files written.
pub fn generate(cli: &Cli) -> Result<Vec<PathBuf>> {
    let config = load_config(cli)?;
    let effective = EffectiveConfig::from_cli_and_config(cli, &config)?;
    if effective.verbose && !cli.verbose {
        logging::set_verbose(true);
    }

    let targets = effective
        .formats
        .iter()
        .map(|&format| Ok((format, output_filename(effective.output.as_deref(), format)?)))
        .collect::<Result<Vec<_>>>()?;

    if effective.verbose {
        println!(
            "Generating SBOM for Terraform configuration in: {}",
            effective.directory.display()
        );
        println!("Output formats: {}", format_list(&effective));
    }

    let sbom = SbomBuilder::new()
        .with_recursive(effective.recursive)
        .with_exclude(effective.exclude.iter().cloned())
        .build_from_path(&effective.directory)?;

    if sbom.is_empty() {
        eprintln!(
            "{} No module calls found in {}",
            "Warning:".yellow(),
            effective.directory.display()
        );
    } else {
        println!("Found {} module(s)", sbom.len());
        if effective.verbose {
            for (kind, count) in sbom.source_breakdown() {
                println!("  {}: {}", kind, count);
            }
        }
    }

    let mut written = Vec::with_capacity(targets.len());
    for (format, path) in targets {
        if effective.verbose {
            println!("Exporting {} format to: {}", format, path.display());
        }

        export(&sbom, format, &path)?;
        println!(
            "{} SBOM successfully exported to {} (format: {})",
            "✓".green(),
            path.display(),
            format
        );
        written.push(path);
    }

    Ok(written)
}

/// Run the command, reporting errors on stderr.
pub fn handle_generate(cli: &Cli) -> ExitCode {
    match generate(cli) {
        Ok(_) => HandlerResult::Success.into(),
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            HandlerResult::Error(1).into()
        }
    }
}
