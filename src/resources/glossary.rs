//! Glossary endpoints

use reqwest::Method;
use serde_json::Value;

use crate::core::client::GengoClient;
use crate::core::errors::Result;
use crate::core::models::Payload;
use crate::resources::require_id;

/// `translate/glossary` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Glossary<'a> {
    client: &'a GengoClient,
}

impl<'a> Glossary<'a> {
    pub(crate) fn new(client: &'a GengoClient) -> Self {
        Self { client }
    }

    /// List the account's glossaries
    pub async fn list(&self, data: impl Into<Payload>) -> Result<Value> {
        self.client
            .send(Method::GET, "translate/glossary", data)
            .await
    }

    /// Fetch a glossary
    pub async fn get(&self, data: impl Into<Payload>) -> Result<Value> {
        let data = data.into();
        let id = require_id(&data)?;
        self.client
            .send(Method::GET, &format!("translate/glossary/{id}"), data)
            .await
    }
}
