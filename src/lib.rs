// Copyright (c) 2025 - Cowboy AI, Inc.
//! Layer 3 out association management for Cisco ACI fabrics
//!
//! Associates, reads or removes the relation between an L3Out and a bridge
//! domain through the APIC REST API. One invocation authenticates, checks
//! that the bridge domain exists (create only), performs the action and
//! classifies the controller's answer.

pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod host;
pub mod module;
pub mod outcome;
pub mod resource;
pub mod session;
pub mod validator;

// Re-export commonly used types
pub use config::{ApicConfig, Protocol};
pub use errors::{L3OutError, L3OutResult};
pub use module::{run, ModuleOutput, ModuleParams};
pub use outcome::OperationResult;
pub use resource::{Action, ResourceKey, ResourceLocator, ResourceName};
pub use session::ApicSession;
pub use validator::BridgeDomainSet;
