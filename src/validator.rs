// Copyright (c) 2025 - Cowboy AI, Inc.
//! Precondition Validator
//!
//! Before a create, the fabric-wide bridge domain listing is fetched once
//! and the target bridge domain must appear in it. The check is best-effort:
//! a bridge domain removed between validation and dispatch is not detected.

use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::dispatcher::AssociationPayload;
use crate::errors::{L3OutError, L3OutResult};
use crate::resource::{ResourceKey, ResourceName};
use crate::session::ApicSession;

/// Snapshot of bridge domain names defined on the controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeDomainSet {
    names: BTreeSet<String>,
}

impl BridgeDomainSet {
    /// Parse a `/api/class/fvBD.json` response body
    ///
    /// Reads `totalCount` records from `imdata`, stopping early if fewer
    /// are present. Records without a `fvBD.attributes.name` are skipped.
    pub fn parse(body: &str) -> L3OutResult<Self> {
        let listing: Value = serde_json::from_str(body)?;

        let total = match &listing["totalCount"] {
            Value::String(s) => s.parse::<usize>().map_err(|e| {
                L3OutError::Deserialization(format!("invalid totalCount {:?}: {}", s, e))
            })?,
            Value::Number(n) => n.as_u64().map(|n| n as usize).ok_or_else(|| {
                L3OutError::Deserialization(format!("invalid totalCount {}", n))
            })?,
            _ => {
                return Err(L3OutError::Deserialization(
                    "missing totalCount in bridge domain listing".to_string(),
                ))
            }
        };

        let records = listing["imdata"].as_array().map(Vec::as_slice).unwrap_or(&[]);
        if records.len() != total {
            warn!(
                "Bridge domain listing reports {} records but carries {}",
                total,
                records.len()
            );
        }

        let names = records
            .iter()
            .take(total)
            .filter_map(|record| record["fvBD"]["attributes"]["name"].as_str())
            .map(str::to_string)
            .collect();

        Ok(Self { names })
    }

    /// Fetch the listing with an authenticated session
    ///
    /// The association payload rides along as the GET body, as the
    /// controller has always received it on this request.
    pub async fn fetch(session: &ApicSession, payload: &AssociationPayload) -> L3OutResult<Self> {
        let url = session.locator().bridge_domain_list_url();
        let response = session.send(Method::GET, &url, Some(payload)).await?;

        if !response.is_ok() {
            return Err(L3OutError::BridgeDomainListingFailed {
                status: response.status,
                response: response.body,
            });
        }

        let set = Self::parse(&response.body)?;
        debug!("Found {} bridge domains", set.len());
        Ok(set)
    }

    pub fn contains(&self, name: &ResourceName) -> bool {
        self.names.contains(name.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Fail with [`L3OutError::PreconditionNotMet`] unless `bd_name` is present
    pub fn require(&self, bd_name: &ResourceName) -> L3OutResult<()> {
        if self.contains(bd_name) {
            Ok(())
        } else {
            Err(L3OutError::PreconditionNotMet {
                bd_name: bd_name.to_string(),
            })
        }
    }
}

/// Confirm the bridge domain exists before a create is dispatched
pub async fn ensure_bridge_domain_exists(
    session: &ApicSession,
    key: &ResourceKey,
) -> L3OutResult<()> {
    let set = BridgeDomainSet::fetch(session, &AssociationPayload::for_key(key)).await?;
    set.require(&key.bd_name)?;
    info!("Bridge domain {} exists", key.bd_name);
    Ok(())
}
