//! Single-job endpoints

use reqwest::Method;
use serde_json::Value;

use crate::core::client::GengoClient;
use crate::core::errors::{GengoError, Result};
use crate::core::models::Payload;
use crate::resources::require_id;

/// `translate/job/{id}` endpoints
///
/// Every method accepts either a bare job id or a structured payload whose
/// `id` field names the job; remaining fields travel with the request.
#[derive(Debug, Clone, Copy)]
pub struct Job<'a> {
    client: &'a GengoClient,
}

impl<'a> Job<'a> {
    pub(crate) fn new(client: &'a GengoClient) -> Self {
        Self { client }
    }

    /// Fetch a job
    pub async fn get(&self, data: impl Into<Payload>) -> Result<Value> {
        let data = data.into();
        let id = require_id(&data)?;
        self.client
            .send(Method::GET, &format!("translate/job/{id}"), data)
            .await
    }

    /// Update a job (approve, revise, reject)
    pub async fn update(&self, data: impl Into<Payload>) -> Result<Value> {
        let data = data.into();
        let id = require_id(&data)?;
        self.client
            .send(Method::PUT, &format!("translate/job/{id}"), data)
            .await
    }

    /// Cancel a job
    pub async fn delete(&self, data: impl Into<Payload>) -> Result<Value> {
        let data = data.into();
        let id = require_id(&data)?;
        self.client
            .send(Method::DELETE, &format!("translate/job/{id}"), data)
            .await
    }

    /// Feedback the customer left on an approved job
    pub async fn feedback(&self, data: impl Into<Payload>) -> Result<Value> {
        let data = data.into();
        let id = require_id(&data)?;
        self.client
            .send(Method::GET, &format!("translate/job/{id}/feedback"), data)
            .await
    }

    /// List revisions of a job
    pub async fn revisions(&self, data: impl Into<Payload>) -> Result<Value> {
        let data = data.into();
        let id = require_id(&data)?;
        self.client
            .send(Method::GET, &format!("translate/job/{id}/revisions"), data)
            .await
    }

    /// Fetch a single revision; the payload names it via `rev_id` (or the
    /// camelCase `revId`)
    pub async fn revision(&self, data: impl Into<Payload>) -> Result<Value> {
        let data = data.into();
        let id = require_id(&data)?;
        let rev_id = data
            .field("rev_id")
            .or_else(|| data.field("revId"))
            .ok_or(GengoError::MissingField { field: "rev_id" })?;
        self.client
            .send(
                Method::GET,
                &format!("translate/job/{id}/revision/{rev_id}"),
                data,
            )
            .await
    }

    /// List comments on a job
    pub async fn comments(&self, data: impl Into<Payload>) -> Result<Value> {
        self.thread(Method::GET, "comments", data).await
    }

    /// Post a comment to a job's thread
    pub async fn add_comment(&self, data: impl Into<Payload>) -> Result<Value> {
        self.thread(Method::POST, "comment", data).await
    }

    async fn thread(
        &self,
        method: Method,
        segment: &str,
        data: impl Into<Payload>,
    ) -> Result<Value> {
        let data = data.into();
        let id = require_id(&data)?;
        self.client
            .send(method, &format!("translate/job/{id}/{segment}"), data)
            .await
    }
}
