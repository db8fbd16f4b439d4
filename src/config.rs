use crate::error::{CheckerError, Result};
use serde::{Deserialize, Serialize};
use sinu_common::DEFAULT_API_URL;
use std::path::{Path, PathBuf};

/// 解析APIのオリジンを上書きする環境変数
pub const API_URL_ENV: &str = "SINU_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    /// リクエストのタイムアウト（秒）。未設定なら無制限
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        Ok(config.with_env_override())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 設定の書き換え用。壊れたファイルは既定値から作り直せるようにする
    pub fn load_for_update(path: &Path) -> Result<Self> {
        match Self::load_from(path) {
            Err(CheckerError::JsonParse(e)) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CheckerError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("sinu-checker").join("config.json"))
    }

    /// 環境変数を優先
    pub fn with_env_override(self) -> Self {
        self.with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    fn with_api_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        self
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        validate_url(&url)?;
        self.api_url = url;
        Ok(())
    }

    /// 0 はタイムアウト無し
    pub fn set_timeout(&mut self, seconds: u64) {
        self.timeout_seconds = (seconds > 0).then_some(seconds);
    }

    pub fn analyze_url(&self) -> String {
        sinu_common::analyze_url(&self.api_url)
    }
}

fn validate_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(CheckerError::InvalidUrl(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.timeout_seconds.is_none());
        assert_eq!(
            config.analyze_url(),
            "https://sinu-acne-backend.onrender.com/api/analyze"
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_api_url("http://localhost:8080".into()).unwrap();
        config.set_timeout(30);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.timeout_seconds, Some(30));
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_seconds": 5}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url, DEFAULT_API_URL);
        assert_eq!(loaded.timeout_seconds, Some(5));
    }

    #[test]
    fn test_corrupt_file_can_be_repaired() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, CheckerError::JsonParse(_)));

        let mut config = Config::load_for_update(&path).unwrap();
        assert_eq!(config, Config::default());
        config.set_api_url("http://localhost:8080".into()).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url, "http://localhost:8080");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut config = Config::default();
        let err = config.set_api_url("ftp://example.com".into()).unwrap_err();
        assert!(matches!(err, CheckerError::InvalidUrl(_)));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_zero_timeout_disables() {
        let mut config = Config::default();
        config.set_timeout(10);
        config.set_timeout(0);
        assert!(config.timeout_seconds.is_none());
    }

    #[test]
    fn test_api_url_override() {
        let config = Config::default().with_api_url_override(Some(" http://127.0.0.1:9 ".into()));
        assert_eq!(config.api_url, "http://127.0.0.1:9");

        let config = Config::default().with_api_url_override(Some("".into()));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
