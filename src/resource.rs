// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource naming and URL construction
//!
//! An association is addressed hierarchically: tenant → bridge domain →
//! L3Out. Names are validated value objects, so nothing reaches a URL path
//! without being checked first.
//!
//! ```text
//! create  POST   /api/mo/uni/tn-{tenant}/BD-{bd}.json
//! read    GET    /api/node/class/fvRsBDToOut.json
//! delete  DELETE /api/mo/uni/tn-{tenant}/BD-{bd}/rsBDToOut-{l3out}.json
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

use crate::config::Protocol;
use crate::errors::{L3OutError, L3OutResult};

/// Login endpoint
pub const LOGIN_PATH: &str = "api/aaaLogin.json";

/// Fabric-wide bridge domain listing
pub const BRIDGE_DOMAIN_LIST_PATH: &str = "/api/class/fvBD.json";

/// Fabric-wide association listing
pub const ASSOCIATION_LIST_PATH: &str = "api/node/class/fvRsBDToOut.json";

/// Resource name validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceNameError {
    #[error("name is empty")]
    Empty,

    #[error("name exceeds maximum length of 64 characters: {0}")]
    TooLong(usize),

    #[error("invalid character in name: {0:?}")]
    InvalidCharacter(char),
}

/// Name of a tenant, bridge domain or L3Out
///
/// # Invariants
/// - Non-empty
/// - At most 64 characters
/// - No path separator, whitespace or control characters
///
/// Characters outside the APIC name alphabet (`A-Z a-z 0-9 _ . : -`) are
/// percent-encoded when the name is placed in a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName(String);

impl ResourceName {
    pub const MAX_LENGTH: usize = 64;

    pub fn new(name: impl Into<String>) -> Result<Self, ResourceNameError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ResourceNameError::Empty);
        }

        let len = name.chars().count();
        if len > Self::MAX_LENGTH {
            return Err(ResourceNameError::TooLong(len));
        }

        if let Some(ch) = name
            .chars()
            .find(|c| *c == '/' || c.is_whitespace() || c.is_control())
        {
            return Err(ResourceNameError::InvalidCharacter(ch));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as a URL path segment
    pub fn path_segment(&self) -> Cow<'_, str> {
        if self.0.chars().all(is_name_char) {
            return Cow::Borrowed(&self.0);
        }

        let mut encoded = String::with_capacity(self.0.len() * 3);
        let mut buf = [0u8; 4];
        for ch in self.0.chars() {
            if is_name_char(ch) {
                encoded.push(ch);
            } else {
                encoded.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
            }
        }
        Cow::Owned(encoded)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '-')
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceName {
    type Error = ResourceNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ResourceName {
    type Error = ResourceNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.0
    }
}

/// Identifies the association targeted by an invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    pub tenant_name: ResourceName,
    pub bd_name: ResourceName,
    pub l3_out: ResourceName,
}

impl ResourceKey {
    pub fn new(tenant_name: &str, bd_name: &str, l3_out: &str) -> L3OutResult<Self> {
        let named = |field: &'static str, value: &str| {
            ResourceName::new(value)
                .map_err(|source| L3OutError::InvalidResourceName { field, source })
        };

        Ok(Self {
            tenant_name: named("tenant_name", tenant_name)?,
            bd_name: named("bd_name", bd_name)?,
            l3_out: named("l3_out", l3_out)?,
        })
    }

    /// Managed object path of the bridge domain (create target)
    pub fn create_path(&self) -> String {
        format!(
            "api/mo/uni/tn-{}/BD-{}.json",
            self.tenant_name.path_segment(),
            self.bd_name.path_segment()
        )
    }

    /// Managed object path of the association (delete target)
    pub fn delete_path(&self) -> String {
        format!(
            "/api/mo/uni/tn-{}/BD-{}/rsBDToOut-{}.json",
            self.tenant_name.path_segment(),
            self.bd_name.path_segment(),
            self.l3_out.path_segment()
        )
    }
}

/// The single action performed per invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Create the association
    #[serde(alias = "create")]
    Post,

    /// Read all associations on the fabric
    #[serde(alias = "read")]
    Get,

    /// Delete the association
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Post => "post",
            Action::Get => "get",
            Action::Delete => "delete",
        }
    }

    /// Only a create mutates in a way that reports `changed`
    pub fn is_create(&self) -> bool {
        matches!(self, Action::Post)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = L3OutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "post" | "create" => Ok(Action::Post),
            "get" | "read" => Ok(Action::Get),
            "delete" => Ok(Action::Delete),
            other => Err(L3OutError::Configuration(format!(
                "action must be one of post, get, delete; got {}",
                other
            ))),
        }
    }
}

/// Builds absolute controller URLs from a `<protocol>://<authority>/` base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    base: String,
}

impl ResourceLocator {
    pub fn new(protocol: Protocol, authority: &str) -> Self {
        Self {
            base: format!("{}://{}/", protocol, authority),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Join a resource path onto the base, dropping leading separators
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    pub fn login_url(&self) -> String {
        self.url(LOGIN_PATH)
    }

    pub fn bridge_domain_list_url(&self) -> String {
        self.url(BRIDGE_DOMAIN_LIST_PATH)
    }

    pub fn create_url(&self, key: &ResourceKey) -> String {
        self.url(&key.create_path())
    }

    pub fn read_url(&self) -> String {
        self.url(ASSOCIATION_LIST_PATH)
    }

    pub fn delete_url(&self, key: &ResourceKey) -> String {
        self.url(&key.delete_path())
    }

    /// URL the given action is dispatched to
    pub fn target_url(&self, action: Action, key: &ResourceKey) -> String {
        match action {
            Action::Post => self.create_url(key),
            Action::Get => self.read_url(),
            Action::Delete => self.delete_url(key),
        }
    }
}
