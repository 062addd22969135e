// Copyright (c) 2025 - Cowboy AI, Inc.
//! Session Authenticator
//!
//! Exchanges a username/password pair for an APIC session. The controller
//! answers a successful login with an `APIC-cookie` session cookie, which
//! the client's cookie store replays on every later request of the call.
//! Nothing is persisted beyond the session value itself.

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::ApicConfig;
use crate::errors::{L3OutError, L3OutResult};
use crate::host::ResolvedHost;
use crate::resource::ResourceLocator;

/// Login body: `{"aaaUser": {"attributes": {"name", "pwd"}}}`
#[derive(Serialize)]
struct LoginRequest<'a> {
    #[serde(rename = "aaaUser")]
    aaa_user: LoginUser<'a>,
}

#[derive(Serialize)]
struct LoginUser<'a> {
    attributes: LoginAttributes<'a>,
}

#[derive(Serialize)]
struct LoginAttributes<'a> {
    name: &'a str,
    pwd: &'a str,
}

/// Status and raw body of a controller response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }
}

/// An authenticated APIC session, valid for the remainder of one call
pub struct ApicSession {
    client: Client,
    locator: ResourceLocator,
}

impl ApicSession {
    /// Log in to the controller
    ///
    /// Fails with [`L3OutError::AuthenticationFailed`] on any non-200 status.
    ///
    /// URLs carry the host name and the client connects to the address it
    /// resolved to, so certificates are verified against the name.
    pub async fn authenticate(config: &ApicConfig, host: &ResolvedHost) -> L3OutResult<Self> {
        let locator = ResourceLocator::new(config.protocol, &host.authority());
        if config.insecure_skip_verify {
            warn!("Certificate validation disabled for {}", locator.base());
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .danger_accept_invalid_certs(config.insecure_skip_verify);
        if let Some((name, address)) = host.pinned() {
            debug!("Pinning {} to {}", name, address.ip());
            builder = builder.resolve(name, address);
        }

        let client = builder
            .build()
            .map_err(|e| {
                L3OutError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let body = LoginRequest {
            aaa_user: LoginUser {
                attributes: LoginAttributes {
                    name: &config.username,
                    pwd: &config.password,
                },
            },
        };

        let url = locator.login_url();
        info!("Authenticating to APIC as {}", config.username);
        let response = client.post(&url).json(&body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if status != StatusCode::OK.as_u16() {
            return Err(L3OutError::AuthenticationFailed {
                status,
                response: text,
            });
        }

        debug!("Authenticated to {}", locator.base());
        Ok(Self { client, locator })
    }

    pub fn locator(&self) -> &ResourceLocator {
        &self.locator
    }

    /// Send a request with the session cookie and an optional JSON body
    pub async fn send<B>(&self, method: Method, url: &str, body: Option<&B>) -> L3OutResult<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        debug!("{} {}", method, url);
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
