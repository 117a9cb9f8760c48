//! Operation façade over the Vault client.

pub mod engine;
pub mod secrets;
