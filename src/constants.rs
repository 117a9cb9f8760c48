//! Centralized constants for defaults, endpoints, and limits.

/// Default Vault base URL when neither flag nor env is set.
pub const DEFAULT_VAULT_URL: &str = "http://127.0.0.1:8200";

/// Secrets engine type mounted by `configure`.
pub const KV_ENGINE_TYPE: &str = "kv";

/// Capabilities granted on `<team>/*` by the team policy.
pub const POLICY_CAPABILITIES: &[&str] = &["read", "create", "update", "list", "delete"];

/// Request header carrying the Vault token.
pub const VAULT_TOKEN_HEADER: &str = "X-Vault-Token";

/// Fixed HTTP timeout for all Vault requests, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default team name offered by the interactive prompt.
pub const DEFAULT_TEAM: &str = "demo";
