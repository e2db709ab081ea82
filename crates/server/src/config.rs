//! Runtime settings for the HTTP server.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Optional settings file, any format the `config` crate understands.
const SETTINGS_FILE: &str = "server";
/// `DOCMATCH_SERVER__PORT=9000` overrides `port`.
const ENV_PREFIX: &str = "DOCMATCH_SERVER";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address to listen on, v4 or v6.
    pub bind_addr: String,
    pub port: u16,
    /// Per-request deadline, in seconds.
    pub timeout_secs: u64,
    /// Upload cap for `/api/match`, in MiB.
    pub max_body_size_mb: usize,
    pub enable_cors: bool,
    /// `EnvFilter` directive for the JSON log output.
    pub log_level: String,
    /// Install the Prometheus recorder and serve `/metrics`.
    pub metrics_enabled: bool,
    /// docmatch YAML naming the text and image templates.
    pub pipeline_config: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".into(),
            port: 8080,
            timeout_secs: 30,
            max_body_size_mb: 16,
            enable_cors: true,
            log_level: "info".into(),
            metrics_enabled: true,
            pipeline_config: PathBuf::from("docmatch.yaml"),
        }
    }
}

impl ServerConfig {
    /// Merge `.env`, the optional settings file and `DOCMATCH_SERVER__*`
    /// variables, later sources winning.
    pub fn load() -> anyhow::Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        let config = config::Config::builder()
            .add_source(config::File::with_name(SETTINGS_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.bind_addr.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Upload cap in bytes.
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}
