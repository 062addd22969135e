// Copyright (c) 2025 - Cowboy AI, Inc.
//! Result Classifier

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::{L3OutError, L3OutResult};
use crate::resource::Action;
use crate::session::RawResponse;

/// Outcome of a successful invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub status: u16,
    /// Raw, unparsed controller response
    pub response: String,
    /// True only for a successful create
    pub changed: bool,
}

/// Map the dispatched response to a result, or to `OperationFailed`
pub fn classify(action: Action, response: RawResponse) -> L3OutResult<OperationResult> {
    if !response.is_ok() {
        error!("{} returned status {}", action, response.status);
        return Err(L3OutError::OperationFailed {
            status: response.status,
            response: response.body,
        });
    }

    let changed = action.is_create();
    info!("{} succeeded (changed: {})", action, changed);
    Ok(OperationResult {
        status: response.status,
        response: response.body,
        changed,
    })
}
