//! Order endpoints

use reqwest::Method;
use serde_json::Value;

use crate::core::client::GengoClient;
use crate::core::errors::Result;
use crate::core::models::Payload;
use crate::resources::require_id;

/// `translate/order/{id}` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Order<'a> {
    client: &'a GengoClient,
}

impl<'a> Order<'a> {
    pub(crate) fn new(client: &'a GengoClient) -> Self {
        Self { client }
    }

    /// Fetch an order and the jobs grouped under it
    pub async fn get(&self, data: impl Into<Payload>) -> Result<Value> {
        let data = data.into();
        let id = require_id(&data)?;
        self.client
            .send(Method::GET, &format!("translate/order/{id}"), data)
            .await
    }

    /// Cancel an order
    pub async fn delete(&self, data: impl Into<Payload>) -> Result<Value> {
        let data = data.into();
        let id = require_id(&data)?;
        self.client
            .send(Method::DELETE, &format!("translate/order/{id}"), data)
            .await
    }
}
