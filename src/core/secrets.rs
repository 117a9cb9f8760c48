//! Secret operations delegated to Vault's logical API.
//!
//! Secrets live at `<team>/<key>` with the value stored under a field named
//! after the key, matching how the engine policy scopes access.

use crate::client::VaultClient;
use crate::models::credentials::Credentials;
use anyhow::{bail, Context, Result};
use zeroize::Zeroizing;

fn client(creds: &Credentials) -> Result<VaultClient> {
    VaultClient::new(&creds.url, &creds.token).context("build vault client")
}

fn secret_path(creds: &Credentials, key: &str) -> String {
    format!("{}/{}", creds.team, key)
}

/// List all secret keys under the team engine. A missing path means no
/// secrets have been written yet.
pub fn list_secrets(creds: &Credentials) -> Result<Vec<String>> {
    let keys = client(creds)?
        .list(&creds.team)
        .with_context(|| format!("list secrets for team '{}'", creds.team))?;
    Ok(keys.unwrap_or_default())
}

/// Read the secret value stored under `key`. `None` when the secret is absent.
pub fn get_secret(creds: &Credentials, key: &str) -> Result<Option<Zeroizing<String>>> {
    let data = client(creds)?
        .read(&secret_path(creds, key))
        .with_context(|| format!("read secret '{}'", key))?;
    let Some(data) = data else {
        return Ok(None);
    };
    match data.get(key) {
        Some(serde_json::Value::String(value)) => Ok(Some(Zeroizing::new(value.clone()))),
        Some(_) => bail!("secret '{}' holds a non-string value", key),
        None => bail!(
            "secret at '{}' has no field '{}'",
            secret_path(creds, key),
            key
        ),
    }
}

/// Write `value` under `key`, silently overwriting any existing value.
pub fn put_secret(creds: &Credentials, key: &str, value: &str) -> Result<()> {
    let mut data = serde_json::Map::new();
    data.insert(
        key.to_string(),
        serde_json::Value::String(value.to_string()),
    );
    client(creds)?
        .write(&secret_path(creds, key), &data)
        .with_context(|| format!("write secret '{}'", key))
}

/// Hard-delete the secret under `key` (kv v1: not versioned, not recoverable).
pub fn delete_secret(creds: &Credentials, key: &str) -> Result<()> {
    client(creds)?
        .delete(&secret_path(creds, key))
        .with_context(|| format!("delete secret '{}'", key))
}
