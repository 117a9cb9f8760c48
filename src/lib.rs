//! Team secret management CLI for HashiCorp Vault.
//!
//! Proxies a small set of secret operations (list, get, add, remove) and a
//! one-time team setup (mount + policy + token) to a Vault server over its
//! HTTP API. One synchronous request per invocation, no local state.
//!
//! ## Modules
//! - `cli` — Command-line handlers and the interactive prompt flow
//! - `client` — Thin HTTP client for Vault's REST API
//! - `core` — Operation façade (secrets, engine setup)
//! - `models` — Data structures

pub mod cli;
pub mod client;
pub mod constants;
pub mod core;
pub mod models;
