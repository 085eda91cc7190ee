use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the web UI listens on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Endpoint of the report service (the process that talks to the router).
    #[serde(default = "default_report_endpoint")]
    pub report_endpoint: String,
    /// Outbound request timeout. A hung report service resolves to the
    /// failure path instead of leaving the form busy forever.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// How long an unconsumed report stays claimable in the transition store.
    #[serde(default = "default_report_ttl")]
    pub report_ttl_secs: u64,
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_report_endpoint() -> String {
    "http://127.0.0.1:5000/api/report".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_report_ttl() -> u64 {
    120
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            report_endpoint: default_report_endpoint(),
            request_timeout_secs: default_request_timeout(),
            report_ttl_secs: default_report_ttl(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

pub fn config_path() -> PathBuf {
    PathBuf::from(
        std::env::var("ROUTERREPORT_CONFIG_PATH")
            .unwrap_or_else(|_| "/var/lib/routerreport/config.json".to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.report_endpoint, "http://127.0.0.1:5000/api/report");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.report_ttl_secs, 120);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let json = r#"{ "report_endpoint": "http://10.0.0.2:5000/api/report" }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.report_endpoint, "http://10.0.0.2:5000/api/report");
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_roundtrip() {
        let json = r#"{ "listen_addr": "127.0.0.1:8080", "request_timeout_secs": 5 }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        let serialized = serde_json::to_string(&config).unwrap();
        let config2: AppConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config2.listen_addr, "127.0.0.1:8080");
        assert_eq!(config2.request_timeout_secs, 5);
    }
}
