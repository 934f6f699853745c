use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

use super::paths::Paths;
use crate::error::{ChangerError, Result};
use crate::platform::Resolution;

/// Keys accepted by `config set`
pub const CONFIG_KEYS: &[&str] = &[
    "service.base_url",
    "download.timeout_secs",
    "display.fallback_width",
    "display.fallback_height",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Image service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Download behaviour
    #[serde(default)]
    pub download: DownloadConfig,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Image service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the random image service
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Download configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Width used when the screen size cannot be queried
    #[serde(default = "default_width")]
    pub fallback_width: u32,
    /// Height used when the screen size cannot be queried
    #[serde(default = "default_height")]
    pub fallback_height: u32,
}

fn default_base_url() -> String {
    "https://picsum.photos".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fallback_width: default_width(),
            fallback_height: default_height(),
        }
    }
}

impl Config {
    /// Load configuration from a specific paths instance
    pub fn load_from(paths: &Paths) -> Result<Self> {
        if !paths.config_exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&paths.config_file)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific paths instance
    pub fn save_to(&self, paths: &Paths) -> Result<()> {
        paths.ensure_dirs()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(&paths.config_file, contents)?;
        Ok(())
    }

    /// Download timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.download.timeout_secs)
    }

    /// Resolution to request when the platform can't report one
    pub fn fallback_resolution(&self) -> Resolution {
        Resolution::new(self.display.fallback_width, self.display.fallback_height)
    }

    /// Set a configuration value by dotted key, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "service.base_url" => {
                let url = url::Url::parse(value)?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(ChangerError::InvalidArgument(
                        "service.base_url must be an http or https URL".to_string(),
                    ));
                }
                self.service.base_url = value.trim_end_matches('/').to_string();
            }
            "download.timeout_secs" => {
                self.download.timeout_secs = parse_positive(key, value)?.into();
            }
            "display.fallback_width" => {
                self.display.fallback_width = parse_positive(key, value)?;
            }
            "display.fallback_height" => {
                self.display.fallback_height = parse_positive(key, value)?;
            }
            _ => {
                return Err(ChangerError::InvalidArgument(format!(
                    "Unknown config key: {}. Valid keys: {}",
                    key,
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ChangerError::InvalidArgument(format!(
            "{key} must be a positive integer, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ─────────────────────────────────────────────────────────────────────────
    // Default Value Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.service.base_url, "https://picsum.photos");
        assert_eq!(config.download.timeout_secs, 60);
        assert_eq!(config.fallback_resolution(), Resolution::new(1920, 1080));
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Load/Save Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_returns_default_when_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path());

        let config = Config::load_from(&paths).unwrap();
        assert_eq!(config.service.base_url, "https://picsum.photos");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("wallpaper-changer"));

        let mut config = Config::default();
        config.set("download.timeout_secs", "15").unwrap();
        config.set("display.fallback_width", "2560").unwrap();
        config.save_to(&paths).unwrap();

        let loaded = Config::load_from(&paths).unwrap();
        assert_eq!(loaded.download.timeout_secs, 15);
        assert_eq!(loaded.display.fallback_width, 2560);
        assert_eq!(loaded.display.fallback_height, 1080);
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path());

        fs::write(
            &paths.config_file,
            r#"
[display]
fallback_height = 1440
"#,
        )
        .unwrap();

        let config = Config::load_from(&paths).unwrap();
        assert_eq!(config.display.fallback_height, 1440);
        assert_eq!(config.display.fallback_width, 1920);
        assert_eq!(config.download.timeout_secs, 60);
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path());
        fs::write(&paths.config_file, "[download\ntimeout_secs = ").unwrap();

        let err = Config::load_from(&paths).unwrap_err();
        assert!(matches!(err, ChangerError::Toml(_)));
        assert_eq!(err.exit_code(), 2);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Setter Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_set_base_url_strips_trailing_slash() {
        let mut config = Config::default();
        config.set("service.base_url", "http://localhost:8080/").unwrap();
        assert_eq!(config.service.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_set_base_url_rejects_other_schemes() {
        let mut config = Config::default();
        assert!(config.set("service.base_url", "ftp://example.com").is_err());
        assert!(config.set("service.base_url", "not a url").is_err());
        assert_eq!(config.service.base_url, "https://picsum.photos");
    }

    #[test]
    fn test_set_rejects_zero_and_garbage() {
        let mut config = Config::default();
        assert!(config.set("download.timeout_secs", "0").is_err());
        assert!(config.set("display.fallback_width", "wide").is_err());
        assert!(config.set("display.fallback_height", "-5").is_err());
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = Config::default();
        let err = config.set("output.format", "json").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
        assert!(err.to_string().contains("service.base_url"));
    }
}
