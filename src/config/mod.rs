use std::env;

use anyhow::{bail, Result};

/// Config holds all application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub vcenter_url: String,
    pub vcenter_user: String,
    pub vcenter_pass: String,
    pub output_dir: String,
    pub cluster: String,
    pub host: String,
    pub http_timeout_secs: u64,
    pub insecure_tls: bool,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn load() -> Self {
        Self {
            vcenter_url: get_env("VCENTER_URL", "https://vcenter.local"),
            vcenter_user: get_env("VCENTER_USER", ""),
            vcenter_pass: get_env("VCENTER_PASS", ""),
            output_dir: get_env("OUTPUT_DIR", "./reports"),
            cluster: get_env("CLUSTER", ""),
            host: get_env("HOST", ""),
            http_timeout_secs: get_env("HTTP_TIMEOUT_SECS", "30")
                .parse()
                .unwrap_or(30),
            insecure_tls: get_env("INSECURE_TLS", "false")
                .parse()
                .unwrap_or(false),
        }
    }

    /// Reject configurations that cannot possibly reach the server
    pub fn validate(&self) -> Result<()> {
        if self.vcenter_user.is_empty() || self.vcenter_pass.is_empty() {
            bail!("VCENTER_USER and VCENTER_PASS must be set");
        }
        Ok(())
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
