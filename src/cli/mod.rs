//! CLI routing and command dispatch.

use crate::constants;
use crate::models::credentials::Credentials;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

pub mod configure;
pub mod prompt;
pub mod secret;

/// Validate a team or secret name for Vault path use.
pub(crate) fn parse_name(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("name cannot be empty".into());
    }
    if s.contains("..") {
        return Err("path traversal not allowed".into());
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-')
    {
        return Err("only [a-zA-Z0-9._-] allowed".into());
    }
    Ok(s.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "opsvault", version, about = "Team secret management on HashiCorp Vault")]
pub struct Cli {
    /// Vault base URL
    #[arg(long, global = true, env = "OPSVAULT_URL", default_value = constants::DEFAULT_VAULT_URL)]
    pub url: String,

    /// Vault access token
    #[arg(long, global = true, env = "OPSVAULT_TOKEN", hide_env_values = true, default_value = "")]
    pub token: String,

    /// Team name (doubles as the secrets engine mount)
    #[arg(long, global = true, env = "OPSVAULT_TEAM", default_value = "")]
    pub team: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // No subcommand: fall back to the interactive prompt flow.
        let Some(command) = self.command else {
            return prompt::run();
        };

        let creds = Credentials {
            url: self.url,
            token: self.token,
            team: self.team,
        };
        require_credentials(&creds)?;

        match command {
            Commands::Configure => configure::run(&creds),
            Commands::Secret { command } => secret::run(&creds, command),
        }
    }
}

fn require_credentials(creds: &Credentials) -> Result<()> {
    if creds.team.is_empty() {
        bail!("--team is required (or set OPSVAULT_TEAM)");
    }
    if let Err(e) = parse_name(&creds.team) {
        bail!("invalid team name: {}", e);
    }
    if creds.token.is_empty() {
        bail!("--token is required (or set OPSVAULT_TOKEN)");
    }
    Ok(())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mount the team's secrets engine, attach its policy, and print a team token
    Configure,
    /// Work with secrets in the team engine
    Secret {
        #[command(subcommand)]
        command: secret::SecretCommand,
    },
}
