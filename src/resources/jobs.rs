//! Job-collection endpoints

use reqwest::Method;
use serde_json::Value;

use crate::core::client::GengoClient;
use crate::core::errors::Result;
use crate::core::models::Payload;

/// `translate/jobs` endpoints
#[derive(Debug, Clone, Copy)]
pub struct Jobs<'a> {
    client: &'a GengoClient,
}

impl<'a> Jobs<'a> {
    pub(crate) fn new(client: &'a GengoClient) -> Self {
        Self { client }
    }

    /// Submit a batch of jobs for translation
    pub async fn create(&self, data: impl Into<Payload>) -> Result<Value> {
        self.client.send(Method::POST, "translate/jobs", data).await
    }

    /// List jobs, optionally filtered by status or timestamp
    pub async fn list(&self, data: impl Into<Payload>) -> Result<Value> {
        self.client.send(Method::GET, "translate/jobs", data).await
    }

    /// Fetch jobs matching the given filter payload
    pub async fn get(&self, data: impl Into<Payload>) -> Result<Value> {
        self.client.send(Method::GET, "translate/jobs/", data).await
    }

    /// Fetch a specific set of jobs by id in one call
    pub async fn get_batch(&self, ids: &[u64]) -> Result<Value> {
        let path = format!("translate/jobs/{}", ids_segment(ids));
        self.client.send(Method::GET, &path, ()).await
    }
}

/// Comma-join ids into a single path segment
fn ids_segment(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_segment_joins_with_commas() {
        assert_eq!(ids_segment(&[1, 2, 3]), "1,2,3");
        assert_eq!(ids_segment(&[42]), "42");
        assert_eq!(ids_segment(&[]), "");
    }
}
