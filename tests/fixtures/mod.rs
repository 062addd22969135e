// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for aci-l3out
//!
//! A wiremock server stands in for the APIC. Fixtures mount the controller
//! endpoints with fixed names, credentials and session cookie so every
//! test is reproducible.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aci_l3out::{Action, ApicConfig, ModuleParams, Protocol};

pub const TENANT: &str = "T1";
pub const BRIDGE_DOMAIN: &str = "BD1";
pub const L3OUT: &str = "L3OUT1";
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
pub const SESSION_TOKEN: &str = "token-0001";

pub const LOGIN_PATH: &str = "/api/aaaLogin.json";
pub const BD_LIST_PATH: &str = "/api/class/fvBD.json";
pub const ASSOCIATION_LIST_PATH: &str = "/api/node/class/fvRsBDToOut.json";
pub const CREATE_PATH: &str = "/api/mo/uni/tn-T1/BD-BD1.json";
pub const DELETE_PATH: &str = "/api/mo/uni/tn-T1/BD-BD1/rsBDToOut-L3OUT1.json";

/// Cookie header the session must replay after login
pub fn session_cookie() -> String {
    format!("APIC-cookie={}", SESSION_TOKEN)
}

/// Parameters targeting the mock controller over plain http
pub fn params(server: &MockServer, action: Action, bd_name: &str) -> ModuleParams {
    ModuleParams {
        action,
        tenant_name: TENANT.to_string(),
        bd_name: bd_name.to_string(),
        l3_out: L3OUT.to_string(),
        apic: ApicConfig {
            host: server.address().to_string(),
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
            protocol: Protocol::Http,
            insecure_skip_verify: false,
            timeout_secs: 5,
        },
    }
}

pub fn association_payload() -> Value {
    json!({"fvRsBDToOut": {"attributes": {"tnL3extOutName": L3OUT}}})
}

pub fn bridge_domain_listing(names: &[&str]) -> Value {
    let imdata: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({"fvBD": {"attributes": {
                "name": name,
                "dn": format!("uni/tn-{}/BD-{}", TENANT, name),
            }}})
        })
        .collect();
    json!({"totalCount": names.len().to_string(), "imdata": imdata})
}

/// Login that succeeds and sets the session cookie
pub async fn mount_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(body_json(json!({
            "aaaUser": {"attributes": {"name": USERNAME, "pwd": PASSWORD}}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("{}; Path=/", session_cookie()).as_str())
                .set_body_json(json!({
                    "totalCount": "1",
                    "imdata": [{"aaaLogin": {"attributes": {"token": SESSION_TOKEN}}}]
                })),
        )
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_login_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Bridge domain listing, answered only with the session cookie and payload body
pub async fn mount_bridge_domains(server: &MockServer, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path(BD_LIST_PATH))
        .and(header("cookie", session_cookie().as_str()))
        .and(body_json(association_payload()))
        .respond_with(ResponseTemplate::new(200).set_body_json(bridge_domain_listing(names)))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_bridge_domains_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(BD_LIST_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Fail the test if `verb path` is ever requested
pub async fn forbid(server: &MockServer, verb: &str, route: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Answer `verb path` once with the session cookie and association payload
pub async fn mount_action(server: &MockServer, verb: &str, route: &str, status: u16, body: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .and(header("cookie", session_cookie().as_str()))
        .and(body_json(association_payload()))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}
