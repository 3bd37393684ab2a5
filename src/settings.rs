//! User settings stored as settings.json in the app data directory

use crate::constants::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Service
    pub api_url: Option<String>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Base URL from the environment override, then the saved setting, then the default.
    pub fn resolve_api_url(&self, env_override: Option<&str>) -> String {
        for (source, candidate) in [("environment", env_override), ("settings", self.api_url.as_deref())] {
            let Some(candidate) = candidate else { continue };
            match validate_api_url(candidate) {
                Ok(url) => {
                    debug!(source, url = %url, "Using configured API URL");
                    return url;
                }
                Err(reason) => warn!(source, value = %candidate, reason = %reason, "Ignoring API URL"),
            }
        }
        DEFAULT_API_URL.to_string()
    }
}

/// Accepts absolute http(s) URLs and returns them without trailing slashes.
pub fn validate_api_url(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    let url = reqwest::Url::parse(trimmed).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_url() {
        assert_eq!(
            validate_api_url(" http://10.0.0.5:8080/ ").as_deref(),
            Ok("http://10.0.0.5:8080")
        );
        assert!(validate_api_url("https://api.example.com/v1").is_ok());
        assert!(validate_api_url("localhost:5000").is_err());
        assert!(validate_api_url("ftp://example.com").is_err());
        assert!(validate_api_url("").is_err());
    }

    #[test]
    fn test_resolve_api_url_precedence() {
        let saved = Settings {
            api_url: Some("http://saved:5000".into()),
            ..Settings::default()
        };
        assert_eq!(saved.resolve_api_url(Some("http://env:5000")), "http://env:5000");
        assert_eq!(saved.resolve_api_url(Some("not a url")), "http://saved:5000");
        assert_eq!(saved.resolve_api_url(None), "http://saved:5000");
        assert_eq!(Settings::default().resolve_api_url(None), DEFAULT_API_URL);
    }

    #[test]
    fn test_load_missing_or_malformed_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());

        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1100.0),
            window_h: Some(760.0),
            api_url: Some("http://127.0.0.1:5000".into()),
            ..Settings::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"api_url": "http://host:1", "theme": "light"}"#,
        )
        .unwrap();
        assert_eq!(Settings::load(dir.path()).api_url.as_deref(), Some("http://host:1"));
    }
}
