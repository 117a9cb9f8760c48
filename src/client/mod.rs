//! Thin synchronous HTTP client for Vault's REST API.
//!
//! Covers exactly the endpoints the CLI needs: logical read/write/list/
//! delete under `/v1/<path>`, `sys` mount and policy writes, and token
//! creation. No retries; Vault's own error messages are surfaced unchanged.

pub mod api;

use crate::constants;
use api::{
    AuthResponse, ErrorResponse, ListResponse, MountRequest, PolicyRequest, SecretResponse,
    TokenCreateRequest,
};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::StatusCode;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("network error communicating with vault")]
    Network(#[source] reqwest::Error),

    #[error("vault authentication failed (check token permissions)")]
    Unauthorized,

    #[error("vault: {0}")]
    Api(String),

    #[error("unexpected vault response: status {0}")]
    UnexpectedStatus(u16),

    #[error("malformed vault response: {0}")]
    Decode(String),
}

/// Percent-encode a single URL path component.
fn encode_segment(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        let safe = b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~');
        if safe {
            out.push(b as char);
        } else {
            out.push('%');
            for digit in [b >> 4, b & 0x0F] {
                // digit < 16, from_digit cannot fail
                out.push(
                    char::from_digit(digit as u32, 16)
                        .unwrap_or('0')
                        .to_ascii_uppercase(),
                );
            }
        }
    }
    out
}

/// Percent-encode each segment of a slash-delimited Vault path.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// Map a non-success response to a `VaultError`, consuming the body.
fn vault_error(resp: Response) -> VaultError {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return VaultError::Unauthorized;
    }
    let code = status.as_u16();
    match resp.json::<ErrorResponse>() {
        Ok(body) if !body.errors.is_empty() => VaultError::Api(body.errors.join("; ")),
        _ => VaultError::UnexpectedStatus(code),
    }
}

fn decode_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, VaultError> {
    resp.json::<T>().map_err(|e| VaultError::Decode(e.to_string()))
}

fn expect_no_content(resp: Response) -> Result<(), VaultError> {
    match resp.status() {
        StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
        _ => Err(vault_error(resp)),
    }
}

/// Vault REST API client bound to one address and token.
#[derive(Debug, Clone)]
pub struct VaultClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl VaultClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, VaultError> {
        let http = HttpClient::builder()
            .user_agent(concat!("opsvault/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(constants::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(VaultError::Network)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, encode_path(path.trim_matches('/')))
    }

    /// List keys under `path`. `Ok(None)` when the path does not exist.
    pub fn list(&self, path: &str) -> Result<Option<Vec<String>>, VaultError> {
        let resp = self
            .http
            .get(self.url(path))
            .query(&[("list", "true")])
            .header(constants::VAULT_TOKEN_HEADER, &self.token)
            .send()
            .map_err(VaultError::Network)?;
        match resp.status() {
            StatusCode::OK => {
                let body: ListResponse = decode_json(resp)?;
                Ok(Some(body.data.keys))
            }
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(vault_error(resp)),
        }
    }

    /// Read the secret at `path`. `Ok(None)` when the secret does not exist.
    pub fn read(
        &self,
        path: &str,
    ) -> Result<Option<serde_json::Map<String, serde_json::Value>>, VaultError> {
        let resp = self
            .http
            .get(self.url(path))
            .header(constants::VAULT_TOKEN_HEADER, &self.token)
            .send()
            .map_err(VaultError::Network)?;
        match resp.status() {
            StatusCode::OK => {
                let body: SecretResponse = decode_json(resp)?;
                Ok(Some(body.data))
            }
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(vault_error(resp)),
        }
    }

    /// Write `data` at `path`, overwriting whatever is there.
    pub fn write(
        &self,
        path: &str,
        data: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), VaultError> {
        let resp = self
            .http
            .post(self.url(path))
            .header(constants::VAULT_TOKEN_HEADER, &self.token)
            .json(data)
            .send()
            .map_err(VaultError::Network)?;
        expect_no_content(resp)
    }

    /// Hard-delete the secret at `path` (kv v1: not versioned, not recoverable).
    pub fn delete(&self, path: &str) -> Result<(), VaultError> {
        let resp = self
            .http
            .delete(self.url(path))
            .header(constants::VAULT_TOKEN_HEADER, &self.token)
            .send()
            .map_err(VaultError::Network)?;
        expect_no_content(resp)
    }

    /// Mount a secrets engine of `engine_type` at `name`.
    pub fn mount(&self, name: &str, engine_type: &str) -> Result<(), VaultError> {
        let resp = self
            .http
            .post(self.url(&format!("sys/mounts/{}", name)))
            .header(constants::VAULT_TOKEN_HEADER, &self.token)
            .json(&MountRequest { engine_type })
            .send()
            .map_err(VaultError::Network)?;
        expect_no_content(resp)
    }

    /// Create or replace the ACL policy `name`.
    pub fn put_policy(&self, name: &str, policy: &str) -> Result<(), VaultError> {
        let resp = self
            .http
            .put(self.url(&format!("sys/policies/acl/{}", name)))
            .header(constants::VAULT_TOKEN_HEADER, &self.token)
            .json(&PolicyRequest { policy })
            .send()
            .map_err(VaultError::Network)?;
        expect_no_content(resp)
    }

    /// Create a token scoped to `policies` and return its client token.
    pub fn create_token(&self, policies: &[&str]) -> Result<String, VaultError> {
        let resp = self
            .http
            .post(self.url("auth/token/create"))
            .header(constants::VAULT_TOKEN_HEADER, &self.token)
            .json(&TokenCreateRequest {
                policies: policies.iter().map(|p| p.to_string()).collect(),
            })
            .send()
            .map_err(VaultError::Network)?;
        if resp.status() != StatusCode::OK {
            return Err(vault_error(resp));
        }
        let body: AuthResponse = decode_json(resp)?;
        Ok(body.auth.client_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Wiremock server driven from a private runtime so the blocking
    /// client can be exercised from the test thread. The server must drop
    /// before the runtime that hosts it.
    struct MockVault {
        server: MockServer,
        rt: tokio::runtime::Runtime,
    }

    impl MockVault {
        fn start() -> Self {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .expect("build test runtime");
            let server = rt.block_on(MockServer::start());
            Self { server, rt }
        }

        fn mount(&self, mock: Mock) {
            self.rt.block_on(mock.mount(&self.server));
        }

        fn client(&self) -> VaultClient {
            VaultClient::new(&self.server.uri(), "test-token").expect("build client")
        }
    }

    #[test]
    fn test_encode_segment_escapes_specials() {
        assert_eq!(encode_segment("my app"), "my%20app");
        assert_eq!(encode_segment("a_b-1.2~x"), "a_b-1.2~x");
    }

    #[test]
    fn test_encode_path_keeps_slashes() {
        assert_eq!(encode_path("demo/db pass"), "demo/db%20pass");
    }

    #[test]
    fn test_list_decodes_keys() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("GET"))
                .and(path("/v1/demo"))
                .and(query_param("list", "true"))
                .and(header("X-Vault-Token", "test-token"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "data": { "keys": ["api_key", "db_password"] }
                }))),
        );

        let keys = vault.client().list("demo").unwrap();
        assert_eq!(keys, Some(vec!["api_key".to_string(), "db_password".to_string()]));
    }

    #[test]
    fn test_list_missing_path_is_none() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("GET"))
                .and(path("/v1/demo"))
                .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "errors": [] }))),
        );

        assert_eq!(vault.client().list("demo").unwrap(), None);
    }

    #[test]
    fn test_list_rejects_non_string_keys() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("GET"))
                .and(path("/v1/demo"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "data": { "keys": [1, 2] }
                }))),
        );

        let err = vault.client().list("demo").unwrap_err();
        assert!(matches!(err, VaultError::Decode(_)));
    }

    #[test]
    fn test_read_returns_data_fields() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("GET"))
                .and(path("/v1/demo/db_password"))
                .and(header("X-Vault-Token", "test-token"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "data": { "db_password": "hunter2" }
                }))),
        );

        let data = vault.client().read("demo/db_password").unwrap().unwrap();
        assert_eq!(data.get("db_password"), Some(&json!("hunter2")));
    }

    #[test]
    fn test_read_missing_secret_is_none() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("GET"))
                .and(path("/v1/demo/nope"))
                .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "errors": [] }))),
        );

        assert!(vault.client().read("demo/nope").unwrap().is_none());
    }

    #[test]
    fn test_write_posts_payload() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("POST"))
                .and(path("/v1/demo/db_password"))
                .and(header("X-Vault-Token", "test-token"))
                .and(body_json(json!({ "db_password": "hunter2" })))
                .respond_with(ResponseTemplate::new(204)),
        );

        let mut data = serde_json::Map::new();
        data.insert("db_password".into(), json!("hunter2"));
        vault.client().write("demo/db_password", &data).unwrap();
    }

    #[test]
    fn test_delete_issues_delete() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("DELETE"))
                .and(path("/v1/demo/db_password"))
                .respond_with(ResponseTemplate::new(204)),
        );

        vault.client().delete("demo/db_password").unwrap();
    }

    #[test]
    fn test_forbidden_maps_to_unauthorized() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("GET"))
                .and(path("/v1/demo"))
                .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                    "errors": ["permission denied"]
                }))),
        );

        let err = vault.client().list("demo").unwrap_err();
        assert!(matches!(err, VaultError::Unauthorized));
    }

    #[test]
    fn test_api_error_carries_vault_messages() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("POST"))
                .and(path("/v1/sys/mounts/demo"))
                .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                    "errors": ["path is already in use at demo/"]
                }))),
        );

        let err = vault.client().mount("demo", "kv").unwrap_err();
        match err {
            VaultError::Api(msg) => assert!(msg.contains("already in use")),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_mount_sends_engine_type() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("POST"))
                .and(path("/v1/sys/mounts/demo"))
                .and(body_json(json!({ "type": "kv" })))
                .respond_with(ResponseTemplate::new(204)),
        );

        vault.client().mount("demo", "kv").unwrap();
    }

    #[test]
    fn test_put_policy_sends_document() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("PUT"))
                .and(path("/v1/sys/policies/acl/demo"))
                .and(body_json(json!({
                    "policy": "path \"demo/*\" { capabilities = [\"read\"] }"
                })))
                .respond_with(ResponseTemplate::new(204)),
        );

        vault
            .client()
            .put_policy("demo", "path \"demo/*\" { capabilities = [\"read\"] }")
            .unwrap();
    }

    #[test]
    fn test_create_token_returns_client_token() {
        let vault = MockVault::start();
        vault.mount(
            Mock::given(method("POST"))
                .and(path("/v1/auth/token/create"))
                .and(body_json(json!({ "policies": ["demo"] })))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "auth": { "client_token": "s.team-token" }
                }))),
        );

        let token = vault.client().create_token(&["demo"]).unwrap();
        assert_eq!(token, "s.team-token");
    }
}
