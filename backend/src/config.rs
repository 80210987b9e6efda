use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

const DEFAULT_INFERENCE_URL: &str = "http://127.0.0.1:8000/predict/";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid inference url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("inference url must be http or https, got {0}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub inference_url: String,
    pub max_upload_bytes: usize,
    pub upstream_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            frontend_dir: default_frontend_dir(),
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../frontend/dist")
}

fn default_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../config/server.yaml")
}

impl ServerConfig {
    /// Reads the YAML file named by `URTICASCAN_CONFIG` (or the repo's
    /// `config/server.yaml` when present), then applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var("URTICASCAN_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => {
                let path = default_config_path();
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    log::info!("No config file at {}, using defaults", path.display());
                    Self::default()
                }
            }
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not a map.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Applies `HOST`, `PORT`, `FRONTEND_DIR`, `INFERENCE_URL`,
    /// `MAX_UPLOAD_BYTES` and `UPSTREAM_TIMEOUT_SECS` from `lookup`, then
    /// validates the result.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = parse("PORT", port)?;
        }
        if let Some(dir) = lookup("FRONTEND_DIR") {
            self.frontend_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup("INFERENCE_URL") {
            self.inference_url = url;
        }
        if let Some(limit) = lookup("MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = parse("MAX_UPLOAD_BYTES", limit)?;
        }
        if let Some(secs) = lookup("UPSTREAM_TIMEOUT_SECS") {
            self.upstream_timeout_secs = parse("UPSTREAM_TIMEOUT_SECS", secs)?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.inference_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_upload_bytes",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default().with_overrides(env(&[])).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8081");
        assert_eq!(config.inference_url, "http://127.0.0.1:8000/predict/");
        assert_eq!(config.max_upload_bytes, 20 * 1024 * 1024);
        assert_eq!(config.upstream_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn yaml_fills_missing_keys_with_defaults() {
        let config = ServerConfig::from_yaml("port: 9000\ninference_url: https://infer.local/predict/\n")
            .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.inference_url, "https://infer.local/predict/");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.upstream_timeout_secs, 60);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(ServerConfig::from_yaml("  \n").unwrap(), ServerConfig::default());
    }

    #[test]
    fn repo_config_file_parses() {
        let config = ServerConfig::from_file(&default_config_path()).unwrap();
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn environment_wins_over_file() {
        let config = ServerConfig::from_yaml("port: 9000\n")
            .unwrap()
            .with_overrides(env(&[
                ("PORT", "7000"),
                ("HOST", "127.0.0.1"),
                ("FRONTEND_DIR", "/srv/site"),
                ("MAX_UPLOAD_BYTES", "1024"),
            ]))
            .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:7000");
        assert_eq!(config.frontend_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn bad_port_is_reported() {
        let err = ServerConfig::default()
            .with_overrides(env(&[("PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn inference_url_is_validated() {
        let err = ServerConfig::default()
            .with_overrides(env(&[("INFERENCE_URL", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));

        let err = ServerConfig::default()
            .with_overrides(env(&[("INFERENCE_URL", "ftp://host/predict/")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(scheme) if scheme == "ftp"));
    }
}
