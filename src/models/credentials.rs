//! Connection credentials shared by every operation.

use std::fmt;

/// Vault connection parameters for a single invocation.
///
/// `team` doubles as the secrets engine mount name. Nothing here is
/// persisted; the struct lives for one process run.
#[derive(Clone)]
pub struct Credentials {
    pub url: String,
    pub token: String,
    pub team: String,
}

impl fmt::Debug for Credentials {
    // Tokens must not leak through debug output or error chains.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .field("team", &self.team)
            .finish()
    }
}
