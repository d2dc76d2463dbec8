//! Async API client with request signing and dispatch logic

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{GengoError, Result};
use crate::core::models::Payload;
use crate::core::normalize::keys_to_underscore;
use crate::core::response;
use crate::core::signature::ApiSignature;
use crate::resources::{Account, Glossary, Job, Jobs, Order, Service};

/// Async Gengo API client
///
/// Cheap to clone and safe to share across tasks; the credential pair is
/// immutable after construction and each call issues exactly one HTTP
/// request with a freshly signed timestamp.
#[derive(Debug, Clone)]
pub struct GengoClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl GengoClient {
    /// Create a new client from a validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate().map_err(|e| GengoError::Config {
            message: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create a client from a credential pair and environment selector
    pub fn with_keys(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        sandbox: bool,
    ) -> Result<Self> {
        Self::new(ClientConfig::new(public_key, private_key).with_sandbox(sandbox))
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env().map_err(|e| GengoError::Config {
            message: e.to_string(),
        })?;
        Self::new(config)
    }

    /// Issue one signed request and normalize its outcome
    ///
    /// GET and DELETE place the normalized payload and the signature fields
    /// in the query string. POST and PUT serialize the payload to JSON under
    /// the single form field `data`, with the signature fields as sibling
    /// form fields; the service rejects signatures embedded in the JSON.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        payload: impl Into<Payload>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url(), path);
        let normalized = keys_to_underscore(&payload.into().into_value());
        let signature = ApiSignature::create(&self.config.public_key, &self.config.private_key);

        debug!(%method, %url, "dispatching API request");

        let request = self
            .client
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json");

        let request = if matches!(method, Method::GET | Method::DELETE) {
            request.query(&query_pairs(&normalized, &signature))
        } else {
            request.form(&form_fields(&normalized, &signature)?)
        };

        let http_response = request.send().await?;
        let status = http_response.status();
        let body = http_response.text().await?;

        response::interpret(status, &body)
    }

    /// Issue a request without waiting for or reporting its outcome
    ///
    /// Spawns the call on the current runtime; failures are logged at `warn`
    /// and otherwise dropped.
    pub fn fire_and_forget(&self, method: Method, path: &str, payload: impl Into<Payload>) {
        let client = self.clone();
        let path = path.to_string();
        let payload = payload.into();

        tokio::spawn(async move {
            if let Err(err) = client.send(method, &path, payload).await {
                warn!(%path, error = %err, "fire-and-forget request failed");
            }
        });
    }

    /// Account endpoints
    pub fn account(&self) -> Account<'_> {
        Account::new(self)
    }

    /// Single-job endpoints
    pub fn job(&self) -> Job<'_> {
        Job::new(self)
    }

    /// Job-collection endpoints
    pub fn jobs(&self) -> Jobs<'_> {
        Jobs::new(self)
    }

    /// Order endpoints
    pub fn order(&self) -> Order<'_> {
        Order::new(self)
    }

    /// Glossary endpoints
    pub fn glossary(&self) -> Glossary<'_> {
        Glossary::new(self)
    }

    /// Service metadata endpoints
    pub fn service(&self) -> Service<'_> {
        Service::new(self)
    }
}

/// Flatten a normalized payload into query pairs and merge the signature
///
/// Scalar values are rendered verbatim; nested structures are JSON-encoded
/// into the single pair.
fn query_pairs(payload: &Value, signature: &ApiSignature) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    if let Value::Object(map) = payload {
        for (key, value) in map {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => continue,
                nested => nested.to_string(),
            };
            pairs.push((key.clone(), rendered));
        }
    }

    pairs.extend(signature.pairs());
    pairs
}

/// Build the POST/PUT form body: payload JSON under `data`, signature fields
/// as siblings
fn form_fields(payload: &Value, signature: &ApiSignature) -> Result<Vec<(String, String)>> {
    let mut fields = vec![("data".to_string(), serde_json::to_string(payload)?)];
    fields.extend(signature.pairs());
    Ok(fields)
}
