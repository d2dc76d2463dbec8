//! Account endpoints

use reqwest::Method;
use serde_json::Value;

use crate::core::client::GengoClient;
use crate::core::errors::Result;

/// `account/*` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    client: &'a GengoClient,
}

impl<'a> Account<'a> {
    pub(crate) fn new(client: &'a GengoClient) -> Self {
        Self { client }
    }

    /// Credits spent, jobs submitted, and other account totals
    pub async fn stats(&self) -> Result<Value> {
        self.client.send(Method::GET, "account/stats", ()).await
    }

    /// Remaining account credit
    pub async fn balance(&self) -> Result<Value> {
        self.client.send(Method::GET, "account/balance", ()).await
    }

    /// Preferred translators grouped by language pair
    pub async fn preferred_translators(&self) -> Result<Value> {
        self.client
            .send(Method::GET, "account/preferred_translators", ())
            .await
    }
}
