// src/settings.rs

use std::{net::SocketAddr, path::Path, time::Duration};

use clap::Parser;
use config::{builder::DefaultState, ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};

use crate::{
    chart::DEFAULT_LABEL_ROW_LIMIT, history::DEFAULT_HISTORY_LIMIT,
    intent::DEFAULT_ROTATION_INTERVAL_MS,
};

const DEFAULT_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Path to the local configuration TOML file.
    #[arg(short, value_name = "CONFIG_PATH")]
    pub config: std::path::PathBuf,

    /// Path to the certificate file. Serves over TLS together with `--key`.
    #[arg(long, value_name = "CERT_PATH", requires = "key")]
    pub cert: Option<std::path::PathBuf>,

    /// Path to the key file.
    #[arg(long, value_name = "KEY_PATH", requires = "cert")]
    pub key: Option<std::path::PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Web {
    #[serde(deserialize_with = "deserialize_socket_addr")]
    pub address: SocketAddr,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadingSettings {
    pub rotation_interval_ms: u64,
    pub rotate: bool,
}

impl LoadingSettings {
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Chart panels with more rows than this are drawn without labels.
    pub label_row_limit: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistorySettings {
    pub limit: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogSettings {
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    pub web: Web,
    pub loading: LoadingSettings,
    pub dashboard: DashboardSettings,
    pub history: HistorySettings,
    pub log: LogSettings,
}

impl Settings {
    /// Load settings from the given TOML file, with sane defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::builder()?.add_source(File::from(path)).build()?.try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .set_default("web.address", DEFAULT_ADDR)?
            .set_default(
                "loading.rotation_interval_ms",
                to_config_int(DEFAULT_ROTATION_INTERVAL_MS),
            )?
            .set_default("loading.rotate", true)?
            .set_default("dashboard.label_row_limit", to_config_int(DEFAULT_LABEL_ROW_LIMIT))?
            .set_default("history.limit", to_config_int(DEFAULT_HISTORY_LIMIT))?
            .set_default("log.level", DEFAULT_LOG_LEVEL)
    }

    /// The maximum log level, falling back to `INFO` for unknown names.
    pub fn log_level(&self) -> tracing::Level {
        self.log.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

fn to_config_int<T: TryInto<i64>>(value: T) -> i64 {
    value.try_into().unwrap_or(i64::MAX)
}

fn deserialize_socket_addr<'de, D>(deserializer: D) -> Result<SocketAddr, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let file = write_config("");
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.web.address, DEFAULT_ADDR.parse().unwrap());
        assert_eq!(settings.loading.rotation_interval(), Duration::from_millis(2500));
        assert!(settings.loading.rotate);
        assert_eq!(settings.dashboard.label_row_limit, 12);
        assert_eq!(settings.history.limit, 50);
        assert_eq!(settings.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn overrides() {
        let file = write_config(
            r#"
            [web]
            address = "0.0.0.0:9100"

            [loading]
            rotation_interval_ms = 1000
            rotate = false

            [dashboard]
            label_row_limit = 20

            [history]
            limit = 10

            [log]
            level = "debug"
            "#,
        );
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.web.address.port(), 9100);
        assert_eq!(settings.loading.rotation_interval_ms, 1000);
        assert!(!settings.loading.rotate);
        assert_eq!(settings.dashboard.label_row_limit, 20);
        assert_eq!(settings.history.limit, 10);
        assert_eq!(settings.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn bad_address() {
        let file = write_config("[web]\naddress = \"not an address\"\n");
        assert!(Settings::from_file(file.path()).is_err());
    }

    #[test]
    fn unknown_log_level_falls_back() {
        let file = write_config("[log]\nlevel = \"chatty\"\n");
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.log_level(), tracing::Level::INFO);
    }
}
