//! Service metadata endpoints

use reqwest::Method;
use serde_json::Value;

use crate::core::client::GengoClient;
use crate::core::errors::Result;
use crate::core::models::Payload;

/// `translate/service/*` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Service<'a> {
    client: &'a GengoClient,
}

impl<'a> Service<'a> {
    pub(crate) fn new(client: &'a GengoClient) -> Self {
        Self { client }
    }

    /// Supported language pairs with unit prices
    pub async fn language_pairs(&self, data: impl Into<Payload>) -> Result<Value> {
        self.client
            .send(Method::GET, "translate/service/language_pairs", data)
            .await
    }

    /// Supported languages
    pub async fn languages(&self, data: impl Into<Payload>) -> Result<Value> {
        self.client
            .send(Method::GET, "translate/service/languages", data)
            .await
    }

    /// Price and eta quote for a prospective batch of jobs
    pub async fn quote(&self, data: impl Into<Payload>) -> Result<Value> {
        self.client
            .send(Method::POST, "translate/service/quote", data)
            .await
    }

    /// Quote for file-based jobs; same endpoint, file keys in the payload
    pub async fn quote_files(&self, data: impl Into<Payload>) -> Result<Value> {
        self.quote(data).await
    }
}
