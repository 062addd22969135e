// Copyright (c) 2025 - Cowboy AI, Inc.
//! Single-pass association flow
//!
//! ```text
//! Start → Resolve → Authenticate → [create: ValidatePrecondition] → Dispatch → Classify
//! ```
//!
//! Each stage is awaited in order and every failure is terminal. At most
//! three requests reach the controller: login, the bridge domain listing
//! (create only) and the dispatched action.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{error, info};

use crate::config::ApicConfig;
use crate::dispatcher::dispatch;
use crate::errors::{L3OutError, L3OutResult};
use crate::host;
use crate::outcome::{classify, OperationResult};
use crate::resource::{Action, ResourceKey};
use crate::session::ApicSession;
use crate::validator::ensure_bridge_domain_exists;

/// Invocation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleParams {
    pub action: Action,
    pub tenant_name: String,
    pub bd_name: String,
    pub l3_out: String,

    #[serde(flatten)]
    pub apic: ApicConfig,
}

impl ModuleParams {
    /// Load parameters from `ACI_ACTION`, `ACI_TENANT`, `ACI_BD`, `ACI_L3OUT`
    /// and the connection variables read by [`ApicConfig::from_env`]
    pub fn from_env() -> L3OutResult<Self> {
        let var = |key: &str| {
            std::env::var(key)
                .map_err(|_| L3OutError::Configuration(format!("{} not set", key)))
        };

        Ok(Self {
            action: var("ACI_ACTION")?.parse()?,
            tenant_name: var("ACI_TENANT")?,
            bd_name: var("ACI_BD")?,
            l3_out: var("ACI_L3OUT")?,
            apic: ApicConfig::from_env()?,
        })
    }

    /// Parse a JSON object of module arguments
    pub fn from_json(raw: &str) -> L3OutResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| L3OutError::Configuration(format!("invalid module arguments: {}", e)))
    }

    /// Read module arguments from a JSON file
    pub fn from_args_file(path: impl AsRef<Path>) -> L3OutResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            L3OutError::Configuration(format!(
                "Failed to read arguments file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&raw)
    }

    pub fn resource_key(&self) -> L3OutResult<ResourceKey> {
        ResourceKey::new(&self.tenant_name, &self.bd_name, &self.l3_out)
    }
}

/// Run one invocation
pub async fn run(params: &ModuleParams) -> L3OutResult<OperationResult> {
    params.apic.validate()?;
    let key = params.resource_key()?;

    let resolved = host::resolve(&params.apic.host, params.apic.protocol).await?;
    info!("Using APIC at {} ({})", resolved.authority(), resolved.address.ip());

    let session = ApicSession::authenticate(&params.apic, &resolved).await?;

    if params.action.is_create() {
        ensure_bridge_domain_exists(&session, &key).await?;
    }

    let response = dispatch(&session, params.action, &key).await?;
    classify(params.action, response)
}

/// What the invocation reports on exit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleOutput {
    Success(OperationResult),
    Failure {
        failed: bool,
        msg: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
        #[serde(skip_serializing_if = "Option::is_none")]
        response: Option<String>,
    },
}

impl ModuleOutput {
    pub fn is_failure(&self) -> bool {
        matches!(self, ModuleOutput::Failure { .. })
    }
}

impl From<L3OutError> for ModuleOutput {
    fn from(err: L3OutError) -> Self {
        error!("{}", err);
        ModuleOutput::Failure {
            failed: true,
            msg: err.to_string(),
            status: err.status(),
            response: err.response().map(str::to_string),
        }
    }
}

impl From<L3OutResult<OperationResult>> for ModuleOutput {
    fn from(result: L3OutResult<OperationResult>) -> Self {
        match result {
            Ok(result) => ModuleOutput::Success(result),
            Err(err) => err.into(),
        }
    }
}
