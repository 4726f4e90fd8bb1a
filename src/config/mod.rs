//! Configuration layer for terraform-sbom.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File discovery and parsing (YAML, JSON, TOML)
//! - `effective`: CLI + config merging

mod effective;
mod error;
mod loading;
mod types;

pub use effective::EffectiveConfig;
pub use error::ConfigError;
pub use loading::PROJECT_CONFIG_FILES;
pub use types::{Config, OutputConfig, ScanConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.scan.recursive);
        assert!(config.scan.exclude.is_empty());
        assert!(config.output.formats.is_empty());
        assert!(config.output.path.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".terraform-sbom.yaml");
        fs::write(
            &config_path,
            r#"
scan:
  recursive: true
  exclude:
    - examples
output:
  formats: [json, spdx]
  path: reports/sbom
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert!(config.scan.recursive);
        assert_eq!(config.scan.exclude, vec!["examples"]);
        assert_eq!(config.output.formats, vec!["json", "spdx"]);
        assert_eq!(config.output.path.as_deref(), Some("reports/sbom"));
    }

    #[test]
    fn test_load_json_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".terraform-sbom.json");
        fs::write(
            &config_path,
            r#"{"output": {"formats": ["cyclonedx"]}, "verbose": true}"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.output.formats, vec!["cyclonedx"]);
        assert!(config.verbose);
    }

    #[test]
    fn test_load_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".terraform-sbom.toml");
        fs::write(
            &config_path,
            r#"
[scan]
recursive = true

[output]
formats = ["csv", "tsv"]
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert!(config.scan.recursive);
        assert_eq!(config.output.formats, vec!["csv", "tsv"]);
    }

    #[test]
    fn test_load_with_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".terraform-sbom.yaml"),
            "scan:\n  recursive: true\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()));
        assert!(config.scan.recursive);
    }

    #[test]
    fn test_load_skips_invalid_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".terraform-sbom.yaml"), "scan: [not, a, map").unwrap();
        fs::write(
            dir.path().join(".terraform-sbom.json"),
            r#"{"output": {"formats": ["xml"]}}"#,
        )
        .unwrap();

        let config = Config::load(Some(dir.path()));
        assert_eq!(config.output.formats, vec!["xml"]);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("sbom.ini");
        fs::write(&config_path, "recursive=true").unwrap();

        let result = Config::from_file(&config_path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_, _))));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::from_file(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }
}
