//! CLI configuration.
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. Command-line flags
//! 2. Environment variables (`QGEN_DIALECT`)
//! 3. Configuration file (`--config` or `~/.qgen/config.yaml`)
//! 4. Default values

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use qgen_emit::Dialect;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings read from the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Dialect used when `--dialect` is not given.
    #[serde(default = "default_dialect")]
    pub default_dialect: Dialect,

    /// Directory for rendered files when `--output` is not given.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_dialect() -> Dialect {
    Dialect::Quil
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_dialect: default_dialect(),
            output_dir: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml_ng::from_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load the explicit config file, else `~/.qgen/config.yaml` if it
    /// exists, else defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(Path::new(path));
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Dialect to render in: the explicit selector if given, else the
    /// configured default.
    pub fn resolve_dialect(&self, selector: Option<&str>) -> Result<Dialect> {
        match selector {
            Some(s) => Ok(s.parse::<Dialect>()?),
            None => Ok(self.default_dialect),
        }
    }
}

/// `~/.qgen/config.yaml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".qgen").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("config.yaml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "default_dialect: q#\noutput_dir: build\n");

        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.default_dialect, Dialect::QSharp);
        assert_eq!(config.output_dir, Some(PathBuf::from("build")));
    }

    #[test]
    fn test_from_file_defaults_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "{}\n");

        assert_eq!(CliConfig::from_file(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_from_file_rejects_unknown_dialect() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "default_dialect: cirq\n");

        assert!(CliConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "default_dialect: qasm\n");

        let config = CliConfig::load(path.to_str()).unwrap();
        assert_eq!(config.default_dialect, Dialect::Qasm);

        let missing = dir.path().join("missing.yaml");
        assert!(CliConfig::load(missing.to_str()).is_err());
    }

    #[test]
    fn test_resolve_dialect() {
        let config = CliConfig {
            default_dialect: Dialect::QSharp,
            output_dir: None,
        };

        assert_eq!(config.resolve_dialect(Some("qasm")).unwrap(), Dialect::Qasm);
        assert_eq!(config.resolve_dialect(Some(" QUIL ")).unwrap(), Dialect::Quil);
        assert_eq!(config.resolve_dialect(None).unwrap(), Dialect::QSharp);

        let err = config.resolve_dialect(Some("cirq")).unwrap_err();
        assert!(err.to_string().contains("cirq"));
    }
}
