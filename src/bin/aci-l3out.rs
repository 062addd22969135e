// Copyright (c) 2025 - Cowboy AI, Inc.
//! APIC L3Out Association Command
//!
//! Creates, reads or deletes the association between a bridge domain and an
//! L3Out, then prints the result as JSON on stdout. Failures, including bad
//! arguments, print `{"failed": true, "msg": ...}` and exit with status 1.
//!
//! Run with: cargo run --bin aci-l3out -- [ARGS_FILE]
//!
//! `ARGS_FILE` is a JSON object of module parameters. Without it, parameters
//! come from the environment: ACI_ACTION, ACI_TENANT, ACI_BD, ACI_L3OUT,
//! ACI_HOST, ACI_USERNAME, ACI_PASSWORD, ACI_PROTOCOL,
//! ACI_INSECURE_SKIP_VERIFY, ACI_TIMEOUT_SECS.

use aci_l3out::{run, L3OutResult, ModuleOutput, ModuleParams};
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::info;

fn load_params() -> L3OutResult<ModuleParams> {
    match std::env::args().nth(1) {
        Some(path) => ModuleParams::from_args_file(path),
        None => ModuleParams::from_env(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let output = match load_params() {
        Ok(params) => {
            info!(
                "Running {} for tenant {} bridge domain {}",
                params.action, params.tenant_name, params.bd_name
            );
            ModuleOutput::from(run(&params).await)
        }
        Err(err) => ModuleOutput::from(err),
    };

    let rendered = serde_json::to_string(&output).context("Failed to render module output")?;
    println!("{}", rendered);

    Ok(if output.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
