//! Endpoint facade over the core dispatch pipeline
//!
//! Each resource is a thin borrow of the client; every method binds one HTTP
//! verb and URL template to [`GengoClient::send`].
//!
//! [`GengoClient::send`]: crate::core::client::GengoClient::send

pub mod account;
pub mod glossary;
pub mod job;
pub mod jobs;
pub mod order;
pub mod service;

pub use account::Account;
pub use glossary::Glossary;
pub use job::Job;
pub use jobs::Jobs;
pub use order::Order;
pub use service::Service;

use crate::core::errors::{GengoError, Result};
use crate::core::models::Payload;

/// Read the id used in a URL path, failing before any request is issued
pub(crate) fn require_id(payload: &Payload) -> Result<String> {
    payload
        .field("id")
        .ok_or(GengoError::MissingField { field: "id" })
}
