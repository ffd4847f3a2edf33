use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::errors::WikiError;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_PORT_FILE: &str = "final-port.txt";

/// Application configuration and constants
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub template_dir: PathBuf,
    pub port: u16,
    pub host: String,
    /// Bind an ephemeral loopback port and publish it in `port_file`
    pub ephemeral: bool,
    pub port_file: PathBuf,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            template_dir: PathBuf::from("tmpl"),
            port: DEFAULT_PORT,
            host: "0.0.0.0".to_string(),
            ephemeral: false,
            port_file: PathBuf::from(DEFAULT_PORT_FILE),
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(
        data_dir: PathBuf,
        template_dir: PathBuf,
        port: Option<u16>,
        host: Option<String>,
        ephemeral: bool,
    ) -> Self {
        Self {
            data_dir,
            template_dir,
            port: port.unwrap_or(DEFAULT_PORT),
            host: host.unwrap_or_else(|| "0.0.0.0".to_string()),
            ephemeral,
            port_file: PathBuf::from(DEFAULT_PORT_FILE),
        }
    }

    /// Get the socket address for binding
    pub fn bind_addr(&self) -> Result<SocketAddr, WikiError> {
        if self.ephemeral {
            return Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0));
        }
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| WikiError::Config(format!("invalid host '{}'", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
