// Copyright (c) 2025 - Cowboy AI, Inc.
//! Controller host parsing and name resolution
//!
//! The host is resolved before any request is sent. The resolved address,
//! IPv4 preferred, is pinned for the host name, which stays the authority
//! of every controller URL.

use std::net::{IpAddr, SocketAddr};
use tokio::net::lookup_host;
use tracing::debug;

use crate::config::Protocol;
use crate::errors::{L3OutError, L3OutResult};

/// Host as supplied by the caller: a name or address with an optional port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerHost {
    name: String,
    port: Option<u16>,
}

impl ControllerHost {
    /// Split `host`, `host:port`, `[v6]` or `[v6]:port`
    pub fn parse(raw: &str) -> L3OutResult<Self> {
        let raw = raw.trim();
        let unresolvable = |reason: &str| L3OutError::HostUnresolvable {
            host: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(unresolvable("empty host"));
        }

        if let Some(rest) = raw.strip_prefix('[') {
            let (name, tail) = rest
                .split_once(']')
                .ok_or_else(|| unresolvable("unterminated IPv6 literal"))?;
            let port = match tail {
                "" => None,
                t => Some(
                    t.strip_prefix(':')
                        .and_then(|p| p.parse().ok())
                        .ok_or_else(|| unresolvable("invalid port"))?,
                ),
            };
            return Ok(Self {
                name: name.to_string(),
                port,
            });
        }

        // A bare IPv6 literal has more than one colon and no port.
        match raw.rsplit_once(':') {
            Some((name, port)) if !name.contains(':') => {
                let port = port.parse().map_err(|_| unresolvable("invalid port"))?;
                Ok(Self {
                    name: name.to_string(),
                    port: Some(port),
                })
            }
            _ => Ok(Self {
                name: raw.to_string(),
                port: None,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Resolve to an address, preferring IPv4
    pub async fn resolve(&self, protocol: Protocol) -> L3OutResult<ResolvedHost> {
        let port = self.port.unwrap_or_else(|| protocol.default_port());

        if let Ok(ip) = self.name.parse::<IpAddr>() {
            return Ok(ResolvedHost {
                name: self.name.clone(),
                address: SocketAddr::new(ip, port),
                port: self.port,
            });
        }

        let addrs: Vec<SocketAddr> = lookup_host((self.name.as_str(), port))
            .await
            .map_err(|e| L3OutError::HostUnresolvable {
                host: self.name.clone(),
                reason: e.to_string(),
            })?
            .collect();

        let address = addrs
            .iter()
            .find(|a| a.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| L3OutError::HostUnresolvable {
                host: self.name.clone(),
                reason: "no addresses returned".to_string(),
            })?;

        debug!("Resolved {} to {}", self.name, address.ip());
        Ok(ResolvedHost {
            name: self.name.clone(),
            address,
            port: self.port,
        })
    }
}

/// A controller host together with the address it resolved to
///
/// URLs keep the caller's name so TLS verifies against it; the resolved
/// address is pinned on the HTTP client instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHost {
    pub name: String,
    pub address: SocketAddr,
    pub port: Option<u16>,
}

impl ResolvedHost {
    /// URL authority: the host name, bracketed for IPv6, with the explicit port if any
    pub fn authority(&self) -> String {
        let host = match self.name.parse::<IpAddr>() {
            Ok(IpAddr::V6(v6)) => format!("[{}]", v6),
            Ok(IpAddr::V4(v4)) => v4.to_string(),
            Err(_) => self.name.clone(),
        };
        match self.port {
            Some(port) => format!("{}:{}", host, port),
            None => host,
        }
    }

    /// Name to pin on the client, unless the host is already an address literal
    pub fn pinned(&self) -> Option<(&str, SocketAddr)> {
        if self.name.parse::<IpAddr>().is_ok() {
            None
        } else {
            Some((self.name.as_str(), self.address))
        }
    }
}

/// Parse and resolve a caller-supplied host
pub async fn resolve(raw: &str, protocol: Protocol) -> L3OutResult<ResolvedHost> {
    ControllerHost::parse(raw)?.resolve(protocol).await
}
