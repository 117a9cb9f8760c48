//! Team access policy rendered as Vault HCL.

use crate::constants;

/// ACL policy granting a team full secret access under its own mount.
#[derive(Debug, Clone)]
pub struct TeamPolicy {
    team: String,
}

impl TeamPolicy {
    pub fn new(team: &str) -> Self {
        Self { team: team.to_string() }
    }

    /// Policy name as registered with Vault (same as the team name).
    pub fn name(&self) -> &str {
        &self.team
    }

    /// Render the HCL policy document.
    pub fn render(&self) -> String {
        let capabilities = constants::POLICY_CAPABILITIES
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "path \"{}/*\" {{ capabilities = [{}] }}",
            self.team, capabilities
        )
    }
}
