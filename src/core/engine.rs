//! One-time team setup: mount a kv engine, attach its policy, mint a token.

use crate::client::VaultClient;
use crate::constants;
use crate::models::credentials::Credentials;
use crate::models::policy::TeamPolicy;
use anyhow::{Context, Result};
use zeroize::Zeroizing;

/// Mount a kv engine named after the team, write an ACL policy granting full
/// secret access under it, and create a token scoped to that policy.
///
/// Fails when the mount already exists; Vault's "path is already in use"
/// message is surfaced unchanged.
pub fn enable_engine(creds: &Credentials) -> Result<Zeroizing<String>> {
    let client = VaultClient::new(&creds.url, &creds.token).context("build vault client")?;

    client
        .mount(&creds.team, constants::KV_ENGINE_TYPE)
        .with_context(|| format!("mount kv engine '{}'", creds.team))?;

    let policy = TeamPolicy::new(&creds.team);
    client
        .put_policy(policy.name(), &policy.render())
        .with_context(|| format!("write policy '{}'", policy.name()))?;

    let token = client
        .create_token(&[policy.name()])
        .with_context(|| format!("create token for team '{}'", creds.team))?;
    Ok(Zeroizing::new(token))
}
