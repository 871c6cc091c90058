use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Model configuration, read fresh on every summarization attempt.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ordered fallback candidates; only the first two are sent per request.
    pub models: Vec<String>,
    pub default_lang: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }
}

/// Default config location: ~/.config/ytsum/config.toml
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
models = ["mistralai/mistral-7b-instruct", "openai/gpt-4o-mini"]
default_lang = "es"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.models,
            vec!["mistralai/mistral-7b-instruct", "openai/gpt-4o-mini"]
        );
        assert_eq!(config.default_lang.as_deref(), Some("es"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.models.is_empty());
        assert!(config.default_lang.is_none());
    }

    #[test]
    fn test_duplicate_models_pass_through() {
        let config: Config = toml::from_str(r#"models = ["m", "m"]"#).unwrap();
        assert_eq!(config.models, vec!["m", "m"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "models = not-a-list").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
