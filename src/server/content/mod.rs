//! Directus REST client.
//!
//! `DirectusClient` is the only code that talks to the content-management system. It reads
//! items from a collection with equality filters and authenticates with the configured
//! bearer token. The shared `reqwest::Client` carries the request timeout, so a stalled
//! upstream surfaces as `ContentError::Timeout` instead of hanging the handler.

pub mod query;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Deserialize};

use crate::server::{
    config::{DirectusConfig, DirectusEndpoint},
    error::content::ContentError,
};

pub use query::ItemsQuery;

/// Success envelope of `GET /items/{collection}`.
#[derive(Deserialize)]
struct ItemsEnvelope<T> {
    data: Vec<T>,
}

/// Error envelope returned by Directus on failures.
#[derive(Deserialize)]
struct ErrorsEnvelope {
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Handle to a Directus instance.
///
/// Cheap to clone: the reqwest client is reference counted internally.
#[derive(Clone)]
pub struct DirectusClient {
    http: reqwest::Client,
    endpoint: DirectusEndpoint,
    token: Option<String>,
}

impl DirectusClient {
    /// Creates a new client.
    ///
    /// Never fails: an unusable endpoint is reported by each request instead.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client, already configured with a timeout
    /// - `config` - Directus endpoint and credentials
    pub fn new(http: reqwest::Client, config: &DirectusConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        }
    }

    /// Reads items of a collection as untyped JSON records.
    pub async fn read_items(
        &self,
        query: &ItemsQuery,
    ) -> Result<Vec<serde_json::Value>, ContentError> {
        self.read_items_as(query).await
    }

    /// Reads items of a collection, decoding each one into `T`.
    ///
    /// # Returns
    /// - `Ok(Vec<T>)` - Items matching the query (possibly empty)
    /// - `Err(ContentError::NotConfigured)` - No usable endpoint URL
    /// - `Err(ContentError::Timeout)` / `Err(ContentError::Request)` - Transport failure
    /// - `Err(ContentError::Status)` - Upstream returned a non-success status
    /// - `Err(ContentError::Decode)` - Body did not match the expected shape
    pub async fn read_items_as<T: DeserializeOwned>(
        &self,
        query: &ItemsQuery,
    ) -> Result<Vec<T>, ContentError> {
        let collection = query.collection.as_str();
        let url = self
            .endpoint
            .url()?
            .join(&query.path())
            .map_err(|e| ContentError::NotConfigured(e.to_string()))?;

        tracing::debug!("Reading Directus collection '{}'", collection);

        let mut request = self.http.get(url).query(&query.params());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentError::from_reqwest(collection, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ContentError::from_reqwest(collection, e))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorsEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.errors.into_iter().next())
                .map(|entry| entry.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });

            return Err(ContentError::Status {
                collection: collection.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ItemsEnvelope<T> =
            serde_json::from_slice(&body).map_err(|source| ContentError::Decode {
                collection: collection.to_string(),
                source,
            })?;

        Ok(envelope.data)
    }
}
