// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for L3Out association operations

use thiserror::Error;

use crate::resource::ResourceNameError;

/// Errors that can occur while managing an L3Out association
///
/// Every variant is terminal for the invocation. Variants produced by the
/// controller carry its raw status code and response body.
#[derive(Debug, Error)]
pub enum L3OutError {
    /// Controller host could not be resolved to an address
    #[error("could not resolve host {host}: {reason}")]
    HostUnresolvable { host: String, reason: String },

    /// Login returned a non-200 status
    #[error("could not authenticate to apic (status {status})")]
    AuthenticationFailed { status: u16, response: String },

    /// Create requested against a bridge domain that does not exist
    #[error("Bridge Domain {bd_name} doesnt exist. Please create bridge domain before associating with L3 out")]
    PreconditionNotMet { bd_name: String },

    /// Bridge domain listing returned a non-200 status
    #[error("could not list bridge domains (status {status})")]
    BridgeDomainListingFailed { status: u16, response: String },

    /// The dispatched action returned a non-200 status
    #[error("{response}")]
    OperationFailed { status: u16, response: String },

    /// Tenant, bridge domain or L3Out name is not a usable path segment
    #[error("Invalid {field}: {source}")]
    InvalidResourceName {
        field: &'static str,
        #[source]
        source: ResourceNameError,
    },

    /// HTTP transport error (connect, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl L3OutError {
    /// Controller status code, when the failure came from the controller
    pub fn status(&self) -> Option<u16> {
        match self {
            L3OutError::AuthenticationFailed { status, .. }
            | L3OutError::BridgeDomainListingFailed { status, .. }
            | L3OutError::OperationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw controller response body, when the failure came from the controller
    pub fn response(&self) -> Option<&str> {
        match self {
            L3OutError::AuthenticationFailed { response, .. }
            | L3OutError::BridgeDomainListingFailed { response, .. }
            | L3OutError::OperationFailed { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// Result type for L3Out association operations
pub type L3OutResult<T> = Result<T, L3OutError>;

impl From<reqwest::Error> for L3OutError {
    fn from(err: reqwest::Error) -> Self {
        L3OutError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for L3OutError {
    fn from(err: serde_json::Error) -> Self {
        L3OutError::Deserialization(err.to_string())
    }
}
