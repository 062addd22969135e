// Copyright (c) 2025 - Cowboy AI, Inc.
//! Action Dispatcher
//!
//! Performs exactly one of create, read or delete against the controller.
//! The association payload is sent as the body of every action, the GET and
//! DELETE included, matching what the controller has always received.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::L3OutResult;
use crate::resource::{Action, ResourceKey};
use crate::session::{ApicSession, RawResponse};

/// `{"fvRsBDToOut": {"attributes": {"tnL3extOutName": ...}}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationPayload {
    #[serde(rename = "fvRsBDToOut")]
    pub relation: AssociationRelation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationRelation {
    pub attributes: AssociationAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationAttributes {
    #[serde(rename = "tnL3extOutName")]
    pub target_l3out_name: String,
}

impl AssociationPayload {
    pub fn for_key(key: &ResourceKey) -> Self {
        Self {
            relation: AssociationRelation {
                attributes: AssociationAttributes {
                    target_l3out_name: key.l3_out.to_string(),
                },
            },
        }
    }
}

fn method_for(action: Action) -> Method {
    match action {
        Action::Post => Method::POST,
        Action::Get => Method::GET,
        Action::Delete => Method::DELETE,
    }
}

/// Send the request for `action` and return the unclassified response
pub async fn dispatch(
    session: &ApicSession,
    action: Action,
    key: &ResourceKey,
) -> L3OutResult<RawResponse> {
    let url = session.locator().target_url(action, key);
    let payload = AssociationPayload::for_key(key);

    info!(
        "Dispatching {} for tenant {} bridge domain {} l3out {}",
        action, key.tenant_name, key.bd_name, key.l3_out
    );
    session.send(method_for(action), &url, Some(&payload)).await
}
