//! TOML configuration for the server daemon
//!
//! Every field is optional. Command-line flags are applied on top of the
//! file with [`Config::apply`].

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Top-level daemon configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
}

/// `[server]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Externally visible base URL used in page links
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_url: None,
        }
    }
}

/// `[data]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// JSON dataset to load; the bundled dataset is used when absent
    pub path: Option<PathBuf>,
}

/// Values given on the command line, each overriding the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub public_url: Option<String>,
    pub data: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply command-line overrides
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if overrides.public_url.is_some() {
            self.server.public_url = overrides.public_url;
        }
        if overrides.data.is_some() {
            self.data.path = overrides.data;
        }
        self
    }

    /// Address to bind. The host may be an IP literal or a name to resolve.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let host = self.server.host.as_str();
        let port = self.server.port;
        (host, port)
            .to_socket_addrs()
            .with_context(|| format!("Invalid listen address: {}:{}", host, port))?
            .next()
            .with_context(|| format!("No address found for {}:{}", host, port))
    }

    /// Base URL for page links. Defaults to the bind address, with a
    /// wildcard host replaced by `localhost`.
    pub fn public_url(&self) -> String {
        if let Some(url) = &self.server.public_url {
            return url.clone();
        }
        let host = match self.server.host.as_str() {
            DEFAULT_HOST => "localhost",
            host => host,
        };
        format!("http://{}:{}", host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.public_url(), "http://localhost:8080");
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.data.path, None);
    }

    #[test]
    fn load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9090

[data]
path = "/srv/locations.json"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(
            config.data.path,
            Some(PathBuf::from("/srv/locations.json"))
        );
        assert_eq!(config.public_url(), "http://localhost:9090");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nprot = 9090").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn overrides_win_over_file() {
        let config = Config::default().apply(Overrides {
            host: Some("127.0.0.1".to_string()),
            port: Some(3000),
            public_url: Some("https://api.example.test".to_string()),
            data: None,
        });

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.public_url(), "https://api.example.test");
    }

    #[test]
    fn hostname_is_resolved() {
        let config = Config::default().apply(Overrides {
            host: Some("localhost".to_string()),
            port: Some(9090),
            ..Default::default()
        });

        let addr = config.socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 9090);
        assert_eq!(config.public_url(), "http://localhost:9090");
    }

    #[test]
    fn explicit_host_is_used_in_public_url() {
        let config = Config::default().apply(Overrides {
            host: Some("127.0.0.1".to_string()),
            ..Default::default()
        });
        assert_eq!(config.public_url(), "http://127.0.0.1:8080");
    }
}
