use crate::mock::directus::{MockDirectus, RecordedRequest};

/// Test context holding a running mock Directus endpoint.
///
/// The mock server is shut down when the context is dropped.
pub struct TestContext {
    /// Running mock of the Directus items endpoint.
    pub directus: MockDirectus,
}

impl TestContext {
    /// Base URL of the mock endpoint, e.g. `http://127.0.0.1:41234`.
    pub fn directus_url(&self) -> String {
        self.directus.base_url()
    }

    /// Token the mock accepts, if authentication was enabled in the builder.
    pub fn token(&self) -> Option<String> {
        self.directus.token()
    }

    /// Requests received by the mock so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.directus.requests()
    }
}
