//! Server configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the scorecard server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Glob the template environment is loaded from.
    pub template_glob: String,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            template_glob: "templates/**/*".to_string(),
            max_body_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl AppConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the template glob.
    pub fn template_glob(mut self, glob: impl Into<String>) -> Self {
        self.template_glob = glob.into();
        self
    }

    /// Get the bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
