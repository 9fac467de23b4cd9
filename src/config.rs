use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    /// "hourly" | "daily" | anything else = never
    pub rotation: String,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "order-service.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Load `<config_dir>/<env>.yaml`. A missing file yields the defaults;
    /// the second value reports whether the file was found.
    pub fn load(config_dir: impl AsRef<Path>, env: &str) -> Result<(Self, bool), ConfigError> {
        let path = config_dir.as_ref().join(format!("{env}.yaml"));
        let display = path.display().to_string();

        match fs::read_to_string(&path) {
            Ok(content) => Self::from_yaml(&content, &display).map(|cfg| (cfg, true)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok((Self::default(), false)),
            Err(source) => Err(ConfigError::Read {
                path: display,
                source,
            }),
        }
    }

    pub fn from_yaml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// `--port` / `PORT` wins over the file.
    pub fn with_port_override(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.gateway.port = port;
        }
        self
    }
}

impl GatewayConfig {
    /// `host:port` for the TCP listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_listen_on_3000() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.gateway.port, 3000);
        assert_eq!(cfg.gateway.listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "log_level: debug\ngateway:\n  port: 8080\n";
        let cfg = AppConfig::from_yaml(yaml, "inline").unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.gateway.port, 8080);
        assert_eq!(cfg.gateway.host, "0.0.0.0");
        assert_eq!(cfg.rotation, "never");
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        let err = AppConfig::from_yaml("gateway: [1, 2", "broken.yaml").unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_port_override() {
        let cfg = AppConfig::default().with_port_override(Some(4100));
        assert_eq!(cfg.gateway.port, 4100);

        let cfg = AppConfig::default().with_port_override(None);
        assert_eq!(cfg.gateway.port, DEFAULT_PORT);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let (cfg, found) = AppConfig::load("/nonexistent-config-dir", "dev").unwrap();
        assert!(!found);
        assert_eq!(cfg, AppConfig::default());
    }
}
