//! Interactive prompt flow, used when no subcommand is given.
//!
//! Collects the same credentials and arguments as the flag-based CLI, then
//! calls the same runners.

use crate::cli::{configure, parse_name, secret};
use crate::constants;
use crate::models::credentials::Credentials;
use anyhow::{Context, Result};
use dialoguer::{Input, Password, Select};
use zeroize::Zeroizing;

pub fn run() -> Result<()> {
    let command = Select::new()
        .with_prompt("Select a command")
        .items(&["Configure the team vault", "Work with secrets"])
        .default(0)
        .interact()
        .context("read command selection")?;
    let is_configure = command == 0;

    let url: String = Input::new()
        .with_prompt("Vault base URL")
        .default(constants::DEFAULT_VAULT_URL.to_string())
        .interact_text()
        .context("read vault url")?;

    let team: String = Input::new()
        .with_prompt("Team name")
        .default(constants::DEFAULT_TEAM.to_string())
        .validate_with(|input: &String| parse_name(input).map(|_| ()))
        .interact_text()
        .context("read team name")?;

    // Configuring needs a root token; day-to-day operations use the team
    // token minted by configure.
    let token_prompt = if is_configure {
        "Vault root token"
    } else {
        "Vault team token"
    };
    let token = Password::new()
        .with_prompt(token_prompt)
        .interact()
        .context("read vault token")?;

    let creds = Credentials { url, token, team };

    if is_configure {
        return configure::run(&creds);
    }

    let action = Select::new()
        .with_prompt("Select a secret action")
        .items(&["list", "add", "get", "remove"])
        .default(0)
        .interact()
        .context("read secret action")?;

    match action {
        0 => secret::run_list(
            &creds,
            secret::ListArgs {
                format: "table".into(),
            },
        ),
        1 => {
            let key = prompt_key()?;
            let value = Zeroizing::new(
                Password::new()
                    .with_prompt("Secret value")
                    .interact()
                    .context("read secret value")?,
            );
            secret::run_add(&creds, &key, &value)
        }
        2 => {
            let key = prompt_key()?;
            secret::run_get(&creds, &key)
        }
        _ => {
            let key = prompt_key()?;
            secret::run_remove(&creds, &key)
        }
    }
}

fn prompt_key() -> Result<String> {
    Input::new()
        .with_prompt("Secret name")
        .validate_with(|input: &String| parse_name(input).map(|_| ()))
        .interact_text()
        .context("read secret name")
}
