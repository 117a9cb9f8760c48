//! Team setup command: mount the engine, attach its policy, print the token.

use crate::core::engine;
use crate::models::credentials::Credentials;
use anyhow::Result;

pub fn run(creds: &Credentials) -> Result<()> {
    let token = engine::enable_engine(creds)?;
    println!(
        "The vault token for team '{}': {}",
        creds.team,
        token.as_str()
    );
    Ok(())
}
