use crate::cli::parse_name;
use crate::core::secrets;
use crate::models::credentials::Credentials;
use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};

#[derive(Subcommand, Debug)]
pub enum SecretCommand {
    /// List all secret keys
    List(ListArgs),
    /// Add or overwrite a secret
    Add(AddArgs),
    /// Get an existing secret
    Get(GetArgs),
    /// Remove an existing secret (hard delete)
    Remove(RemoveArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format: table|json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Secret name
    #[arg(value_parser = parse_name)]
    pub key: String,

    /// Secret value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Secret name
    #[arg(value_parser = parse_name)]
    pub key: String,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Secret name
    #[arg(value_parser = parse_name)]
    pub key: String,
}

pub fn run(creds: &Credentials, command: SecretCommand) -> Result<()> {
    match command {
        SecretCommand::List(args) => run_list(creds, args),
        SecretCommand::Add(args) => run_add(creds, &args.key, &args.value),
        SecretCommand::Get(args) => run_get(creds, &args.key),
        SecretCommand::Remove(args) => run_remove(creds, &args.key),
    }
}

pub fn run_list(creds: &Credentials, args: ListArgs) -> Result<()> {
    let keys = secrets::list_secrets(creds)?;
    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&keys)?),
        "table" => {
            if keys.is_empty() {
                println!("No secrets stored for team '{}'", creds.team);
                return Ok(());
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec![Cell::new("SECRET").add_attribute(Attribute::Bold)]);
            for key in &keys {
                table.add_row(vec![Cell::new(key)]);
            }
            println!("{}", table);
        }
        other => bail!("unknown format '{}', expected table or json", other),
    }
    Ok(())
}

pub fn run_add(creds: &Credentials, key: &str, value: &str) -> Result<()> {
    secrets::put_secret(creds, key, value)?;
    println!("New secret has been created");
    Ok(())
}

pub fn run_get(creds: &Credentials, key: &str) -> Result<()> {
    match secrets::get_secret(creds, key)? {
        Some(value) => println!("{} -> {}", key, value.as_str()),
        None => println!("No secret stored under '{}'", key),
    }
    Ok(())
}

pub fn run_remove(creds: &Credentials, key: &str) -> Result<()> {
    secrets::delete_secret(creds, key)?;
    println!("'{}' has been deleted", key);
    Ok(())
}
