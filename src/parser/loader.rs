//! Loading every module call declared by one Terraform directory.

use super::traits::ModuleCall;
use super::{ParserRegistry, is_override_file};
use crate::error::{Result, SbomError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Editor backups and lock files are never configuration.
fn is_ignored_file(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('#') || name.ends_with('~')
}

/// List the configuration files directly inside `dir`, split into
/// primary and override files, each in lexical order.
fn config_files(dir: &Path, registry: &ParserRegistry) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let entries = fs::read_dir(dir).map_err(|e| SbomError::list_error(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SbomError::list_error(dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| SbomError::list_error(entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if is_ignored_file(name) || registry.parser_for(name).is_none() {
            continue;
        }
        files.push(entry.path());
    }
    files.sort();

    Ok(files.into_iter().partition(|path| {
        !path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_override_file)
    }))
}

fn parse_file(path: &Path, registry: &ParserRegistry) -> Result<Vec<ModuleCall>> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let Some(parser) = registry.parser_for(name) else {
        return Ok(Vec::new());
    };

    let content = fs::read_to_string(path).map_err(|e| SbomError::read_error(path, e))?;
    let calls = parser.parse(&content, path)?;
    debug!(file = %path.display(), modules = calls.len(), "Parsed configuration file");
    Ok(calls)
}

/// Load the module calls declared in `dir`.
///
/// Primary files are read in lexical order and their blocks kept in
/// source order. Override files are applied afterwards: each override
/// block replaces the non-empty `source` and `version` of the primary
/// block with the same name.
pub fn load_module(dir: &Path) -> Result<Vec<ModuleCall>> {
    let registry = ParserRegistry::new();
    let (primary, overrides) = config_files(dir, &registry)?;

    let mut calls: Vec<ModuleCall> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for path in &primary {
        for call in parse_file(path, &registry)? {
            if index.contains_key(&call.name) {
                return Err(SbomError::DuplicateModule {
                    name: call.name,
                    path: call.pos.filename,
                    line: call.pos.line,
                });
            }
            index.insert(call.name.clone(), calls.len());
            calls.push(call);
        }
    }

    for path in &overrides {
        for patch in parse_file(path, &registry)? {
            let Some(&i) = index.get(&patch.name) else {
                return Err(SbomError::UnknownOverride {
                    name: patch.name,
                    path: patch.pos.filename,
                    line: patch.pos.line,
                });
            };

            let target = &mut calls[i];
            if !patch.source.is_empty() {
                target.source = patch.source;
            }
            if !patch.version.is_empty() {
                target.version = patch.version;
            }
        }
    }

    Ok(calls)
}
