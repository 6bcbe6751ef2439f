use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("SITE_DIR {0:?} is not a directory; run `trunk build` in frontend/ first")]
    MissingSiteDir(PathBuf),
}

/// Where the built site lives and how to serve it.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub site_dir: PathBuf,
    pub port: u16,
    pub environment: String,
}

impl SiteConfig {
    pub const DEFAULT_SITE_DIR: &'static str = "frontend/dist";
    pub const DEFAULT_PORT: u16 = 3000;

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; `from_env` passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let site_dir = lookup("SITE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_SITE_DIR));
        if !site_dir.is_dir() {
            return Err(ConfigError::MissingSiteDir(site_dir));
        }
        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => Self::DEFAULT_PORT,
        };
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "production".to_string());
        Ok(Self {
            site_dir,
            port,
            environment,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        let config = SiteConfig::from_lookup(lookup(&[("SITE_DIR", dir_str)])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "production");
        assert!(!config.is_development());
    }

    #[test]
    fn reads_port_and_environment() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        let config = SiteConfig::from_lookup(lookup(&[
            ("SITE_DIR", dir_str),
            ("PORT", "8081"),
            ("ENVIRONMENT", "development"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8081);
        assert!(config.is_development());
    }

    #[test]
    fn rejects_bad_port() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        for port in ["0", "http", "70000"] {
            let err = SiteConfig::from_lookup(lookup(&[("SITE_DIR", dir_str), ("PORT", port)]))
                .unwrap_err();
            assert_eq!(err, ConfigError::InvalidPort(port.to_string()));
        }
    }

    #[test]
    fn rejects_missing_site_dir() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_DIR", "/definitely/not/here")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingSiteDir(_)));
    }
}
