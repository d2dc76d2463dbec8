//! Gengo API Client - Async Rust client for the Gengo translation service
//!
//! This library signs, dispatches, and normalizes requests against the Gengo
//! HTTP API, exposing the account, job, order, glossary, and service
//! endpoints behind a single [`GengoClient`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod resources;

// Re-export key types for convenience
pub use crate::core::{
    client::GengoClient,
    config::ClientConfig,
    errors::{ErrorKind, GengoError, Result},
    models::Payload,
    signature::ApiSignature,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
