// Copyright (c) 2025 - Cowboy AI, Inc.
//! APIC connection configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{L3OutError, L3OutResult};

/// Connection protocol used to reach the controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }

    /// Port used when the host carries no explicit port
    pub fn default_port(&self) -> u16 {
        match self {
            Protocol::Http => 80,
            Protocol::Https => 443,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = L3OutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(L3OutError::Configuration(format!(
                "protocol must be one of http, https; got {}",
                other
            ))),
        }
    }
}

/// Configuration for an APIC connection
///
/// Immutable for the duration of a call. Certificate validation stays on
/// unless `insecure_skip_verify` is set; controllers commonly present
/// self-signed certificates, so callers enabling it accept that risk.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApicConfig {
    /// IP address or hostname of the APIC, optionally with `:port`
    pub host: String,

    /// Login user (default: `admin`)
    #[serde(default = "default_username")]
    pub username: String,

    /// Login password
    pub password: String,

    /// Connection protocol (default: https)
    #[serde(default)]
    pub protocol: Protocol,

    /// Accept invalid or self-signed controller certificates
    #[serde(default)]
    pub insecure_skip_verify: bool,

    /// Timeout in seconds applied to every request
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ApicConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: default_username(),
            password: String::new(),
            protocol: Protocol::default(),
            insecure_skip_verify: false,
            timeout_secs: default_timeout(),
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for ApicConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApicConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("protocol", &self.protocol)
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ApicConfig {
    /// Load configuration from `ACI_*` environment variables
    pub fn from_env() -> L3OutResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> L3OutResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("ACI_HOST")
            .ok_or_else(|| L3OutError::Configuration("ACI_HOST not set".to_string()))?;
        let password = lookup("ACI_PASSWORD")
            .ok_or_else(|| L3OutError::Configuration("ACI_PASSWORD not set".to_string()))?;
        let username = lookup("ACI_USERNAME").unwrap_or_else(default_username);
        let protocol = match lookup("ACI_PROTOCOL") {
            Some(p) => p.parse()?,
            None => Protocol::default(),
        };
        let insecure_skip_verify = match lookup("ACI_INSECURE_SKIP_VERIFY") {
            Some(v) => parse_bool(&v)?,
            None => false,
        };
        let timeout_secs = match lookup("ACI_TIMEOUT_SECS") {
            Some(v) => v.parse().map_err(|e| {
                L3OutError::Configuration(format!("ACI_TIMEOUT_SECS invalid: {}", e))
            })?,
            None => default_timeout(),
        };

        let config = Self {
            host,
            username,
            password,
            protocol,
            insecure_skip_verify,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check required fields
    pub fn validate(&self) -> L3OutResult<()> {
        if self.host.trim().is_empty() {
            return Err(L3OutError::Configuration("host is required".to_string()));
        }
        if self.username.is_empty() {
            return Err(L3OutError::Configuration("username is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(L3OutError::Configuration("password is required".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(L3OutError::Configuration(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> L3OutResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(L3OutError::Configuration(format!(
            "expected a boolean, got {}",
            other
        ))),
    }
}
