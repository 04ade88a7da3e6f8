//! Application configuration
//!
//! Optional settings come from a TOML file at `~/.config/fontpair/config.toml`;
//! every field has a serde default so a missing or partial file still yields a
//! usable config. The API key is never stored in the struct used at runtime:
//! it is resolved separately from the environment (`GEMINI_API_KEY`, then
//! `GOOGLE_API_KEY`) with the file's `api_key` as a last resort.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// User-tunable settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Generation model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Font searched automatically at startup
    #[serde(default = "default_font")]
    pub default_font: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// API key fallback when neither environment variable is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_model() -> String {
    "gemini-2.5-flash".into()
}
fn default_font() -> String {
    "Montserrat".into()
}
fn default_timeout() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            default_font: default_font(),
            timeout_secs: default_timeout(),
            api_key: None,
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// Load config from the default location, falling back to defaults when
    /// no file exists. A file that exists but cannot be read or parsed is
    /// still an error; silently ignoring a broken file hides typos.
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Resolve the API key from the environment, falling back to the config
    /// file's `api_key` field.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        pick_api_key(
            std::env::var("GEMINI_API_KEY").ok(),
            std::env::var("GOOGLE_API_KEY").ok(),
            self.api_key.clone(),
        )
        .ok_or(ConfigError::MissingApiKey)
    }
}

/// Default config file location (`~/.config/fontpair/config.toml` on Linux).
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fontpair").join("config.toml"))
}

/// First non-empty candidate wins: `GEMINI_API_KEY`, then `GOOGLE_API_KEY`,
/// then the config file. Whitespace-only values count as unset.
fn pick_api_key(
    gemini: Option<String>,
    google: Option<String>,
    file: Option<String>,
) -> Option<String> {
    [gemini, google, file]
        .into_iter()
        .flatten()
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.default_font, "Montserrat");
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(r#"model = "gemini-2.0-flash""#).unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.default_font, "Montserrat");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_font = \"Inter\"\ntimeout_secs = 30").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.default_font, "Inter");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = \"not a number\"").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_pick_api_key_precedence() {
        assert_eq!(
            pick_api_key(Some("g1".into()), Some("g2".into()), Some("g3".into())),
            Some("g1".into())
        );
        assert_eq!(pick_api_key(None, Some("g2".into()), Some("g3".into())), Some("g2".into()));
        assert_eq!(pick_api_key(None, None, Some("g3".into())), Some("g3".into()));
        assert_eq!(pick_api_key(None, None, None), None);
    }

    #[test]
    fn test_pick_api_key_skips_blank_values() {
        assert_eq!(pick_api_key(Some("  ".into()), Some("g2".into()), None), Some("g2".into()));
        assert_eq!(pick_api_key(Some(String::new()), None, None), None);
    }
}
