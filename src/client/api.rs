//! Typed payloads for the slice of Vault's REST API this tool touches.

use serde::{Deserialize, Serialize};

/// Secret read response: `{ "data": { <field>: <value>, ... } }`.
#[derive(Debug, Deserialize)]
pub struct SecretResponse {
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Key listing response: `{ "data": { "keys": [...] } }`.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub data: ListData,
}

#[derive(Debug, Deserialize)]
pub struct ListData {
    #[serde(default)]
    pub keys: Vec<String>,
}

/// Token creation response: `{ "auth": { "client_token": ... } }`.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub auth: TokenAuth,
}

#[derive(Debug, Deserialize)]
pub struct TokenAuth {
    pub client_token: String,
}

/// Error body Vault attaches to failed requests.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Body for `sys/mounts/<name>`.
#[derive(Debug, Serialize)]
pub struct MountRequest<'a> {
    #[serde(rename = "type")]
    pub engine_type: &'a str,
}

/// Body for `sys/policies/acl/<name>`.
#[derive(Debug, Serialize)]
pub struct PolicyRequest<'a> {
    pub policy: &'a str,
}

/// Body for `auth/token/create`.
#[derive(Debug, Serialize)]
pub struct TokenCreateRequest {
    pub policies: Vec<String>,
}
