// Configuration for data, logo, and schema settings.
// Merges command-line overrides, an optional JSON config file, and defaults.

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::SchemaPolicy;
use crate::error::ConfigError;

pub const DEFAULT_VIVA_PATH: &str = "data/viva.csv";
pub const DEFAULT_GLOSSARY_PATH: &str = "data/glossary.csv";
pub const DEFAULT_LOGO_PATH: &str = "images/logo.png";

/// Settings from the JSON config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub viva_path: Option<PathBuf>,
    pub glossary_path: Option<PathBuf>,
    pub logo_path: Option<PathBuf>,
    pub schema: Option<SchemaPolicy>,
}

/// Command-line overrides.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct Overrides {
    /// Question CSV file (Windows-1252)
    #[arg(long, value_name = "PATH")]
    pub viva: Option<PathBuf>,

    /// Glossary CSV file (UTF-8)
    #[arg(long, value_name = "PATH")]
    pub glossary: Option<PathBuf>,

    /// Header logo image (PNG)
    #[arg(long, value_name = "PATH")]
    pub logo: Option<PathBuf>,

    /// How question file columns are resolved
    #[arg(long, value_enum)]
    pub schema: Option<SchemaPolicy>,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub viva_path: PathBuf,
    pub glossary_path: PathBuf,
    pub logo_path: PathBuf,
    pub schema: SchemaPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(ConfigFile::default(), &Overrides::default())
    }
}

impl Config {
    /// Load the config file (explicit or platform default) and apply overrides.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        let file = match &overrides.config {
            Some(path) => read_config_file(path)?,
            None => match paths::config_path() {
                Some(path) if path.exists() => read_config_file(&path)?,
                _ => ConfigFile::default(),
            },
        };
        let config = Self::resolve(file, overrides);
        tracing::debug!(?config, "resolved config");
        Ok(config)
    }

    /// Command line wins over the file, the file wins over defaults.
    pub fn resolve(file: ConfigFile, overrides: &Overrides) -> Self {
        Self {
            viva_path: overrides
                .viva
                .clone()
                .or(file.viva_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_VIVA_PATH)),
            glossary_path: overrides
                .glossary
                .clone()
                .or(file.glossary_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GLOSSARY_PATH)),
            logo_path: overrides
                .logo
                .clone()
                .or(file.logo_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGO_PATH)),
            schema: overrides.schema.or(file.schema).unwrap_or_default(),
        }
    }
}

/// Read and parse a JSON config file.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.viva_path, PathBuf::from(DEFAULT_VIVA_PATH));
        assert_eq!(config.glossary_path, PathBuf::from(DEFAULT_GLOSSARY_PATH));
        assert_eq!(config.logo_path, PathBuf::from(DEFAULT_LOGO_PATH));
        assert_eq!(config.schema, SchemaPolicy::Declared);
    }

    #[test]
    fn test_precedence() {
        let file = ConfigFile {
            viva_path: Some(PathBuf::from("file/viva.csv")),
            glossary_path: Some(PathBuf::from("file/glossary.csv")),
            logo_path: None,
            schema: Some(SchemaPolicy::Positional),
        };
        let overrides = Overrides {
            viva: Some(PathBuf::from("cli/viva.csv")),
            ..Default::default()
        };

        let config = Config::resolve(file, &overrides);
        assert_eq!(config.viva_path, PathBuf::from("cli/viva.csv"));
        assert_eq!(config.glossary_path, PathBuf::from("file/glossary.csv"));
        assert_eq!(config.logo_path, PathBuf::from(DEFAULT_LOGO_PATH));
        assert_eq!(config.schema, SchemaPolicy::Positional);
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "glossary_path": "terms.csv", "schema": "positional" }"#).unwrap();

        let overrides = Overrides {
            config: Some(path),
            ..Default::default()
        };
        let config = Config::load(&overrides).unwrap();
        assert_eq!(config.glossary_path, PathBuf::from("terms.csv"));
        assert_eq!(config.schema, SchemaPolicy::Positional);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "viva": 3 }"#).unwrap();

        let err = read_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let overrides = Overrides {
            config: Some(temp_dir.path().join("nope.json")),
            ..Default::default()
        };
        assert!(matches!(
            Config::load(&overrides),
            Err(ConfigError::Io { .. })
        ));
    }
}
