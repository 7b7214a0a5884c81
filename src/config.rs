use eyre::{eyre, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::Level;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server-level settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    pub log_level: Level,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_level: Level::DEBUG,
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Unset variables fall back to defaults; set but invalid ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("SERVER_BIND_ADDRESS") {
            config.bind_address = value.trim().parse().map_err(|_| {
                eyre!("SERVER_BIND_ADDRESS must be an IP address, got {value:?}")
            })?;
        }

        if let Some(value) = lookup("SERVER_LOCAL_PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| eyre!("SERVER_LOCAL_PORT must be a port number, got {value:?}"))?;
        }

        if let Some(value) = lookup("LOG_LEVEL") {
            config.log_level = value
                .trim()
                .parse()
                .map_err(|_| eyre!("LOG_LEVEL must be one of trace, debug, info, warn, error, got {value:?}"))?;
        }

        if let Some(value) = lookup("LOG_FORMAT") {
            config.log_format = match value.trim().to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => return Err(eyre!("LOG_FORMAT must be text or json, got {value:?}")),
            };
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}
