use std::{collections::HashMap, time::Duration};

use serde_json::Value;

use crate::{
    context::TestContext,
    error::TestError,
    mock::directus::{MockDirectus, MockState},
};

/// Collection name hotels are stored under upstream.
pub const HOTELS_COLLECTION: &str = "hotels";

/// Builder for creating test contexts backed by a mock Directus endpoint.
///
/// Seed collections with records, optionally require a bearer token, inject failing
/// collections or a response delay, then call `build()` to start the mock server.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_token("secret")
///     .with_hotel(fixture::hotel::record())
///     .with_failure("local_places", 503, "Service Unavailable")
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    collections: HashMap<String, Vec<Value>>,
    failures: HashMap<String, (u16, String)>,
    token: Option<String>,
    delay: Option<Duration>,
}

impl TestBuilder {
    /// Creates a builder with an empty `hotels` collection and no authentication.
    pub fn new() -> Self {
        let mut collections = HashMap::new();
        collections.insert(HOTELS_COLLECTION.to_string(), Vec::new());

        Self {
            collections,
            failures: HashMap::new(),
            token: None,
            delay: None,
        }
    }

    /// Adds a record to the `hotels` collection.
    pub fn with_hotel(self, record: Value) -> Self {
        self.with_entry(HOTELS_COLLECTION, record)
    }

    /// Adds a record to an arbitrary collection, creating the collection if needed.
    pub fn with_entry(mut self, collection: &str, record: Value) -> Self {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
        self
    }

    /// Declares a collection that exists but holds no records.
    ///
    /// Unknown collections answer 403 like Directus does, so empty collections must be
    /// declared explicitly.
    pub fn with_collection(mut self, collection: &str) -> Self {
        self.collections.entry(collection.to_string()).or_default();
        self
    }

    /// Requires `Authorization: Bearer <token>` on every request.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Makes every request to `collection` fail with the given status and message.
    pub fn with_failure(mut self, collection: &str, status: u16, message: &str) -> Self {
        self.failures
            .insert(collection.to_string(), (status, message.to_string()));
        self
    }

    /// Delays every response, for exercising client timeouts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Starts the mock server and returns the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Mock server listening on an ephemeral localhost port
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn build(self) -> Result<TestContext, TestError> {
        let state = MockState::new(self.collections, self.failures, self.token, self.delay);
        let directus = MockDirectus::start(state).await?;

        Ok(TestContext { directus })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
