//! One-pass verification of a hotel's directory content.
//!
//! Backs the `verify-content` binary: reads the raw records of each requested collection
//! straight from Directus, prints what came back, and keeps going when a collection fails.

use std::io::{self, Write};

use dioxus_logger::tracing;

use crate::{
    model::directory::DirectoryCollection,
    server::{
        content::{DirectusClient, ItemsQuery},
        data::directus::HOTEL_ID_FIELD,
    },
};

/// Collections checked when none are requested explicitly.
pub const DEFAULT_COLLECTIONS: [DirectoryCollection; 2] = [
    DirectoryCollection::Transportation,
    DirectoryCollection::LocalPlaces,
];

/// Outcome of a verification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub checked: usize,
    pub failed: usize,
}

impl VerifyReport {
    pub fn succeeded(&self) -> bool {
        self.failed == 0
    }
}

pub struct VerifyService<'a> {
    client: &'a DirectusClient,
}

impl<'a> VerifyService<'a> {
    pub fn new(client: &'a DirectusClient) -> Self {
        Self { client }
    }

    /// Reads every collection once for `hotel_id`, writing results to `out` and
    /// failures to `err`.
    ///
    /// Failures are counted, never retried, and do not stop the remaining collections.
    ///
    /// # Returns
    /// - `Ok(VerifyReport)` - Pass completed; inspect `failed` for query failures
    /// - `Err(io::Error)` - Writing to `out` or `err` failed
    pub async fn run<W: Write, E: Write>(
        &self,
        hotel_id: i64,
        collections: &[DirectoryCollection],
        out: &mut W,
        err: &mut E,
    ) -> io::Result<VerifyReport> {
        let mut report = VerifyReport::default();

        for collection in collections {
            let name = collection.collection_name();
            report.checked += 1;
            writeln!(out, "== {} ({}) for hotel {} ==", collection.label(), name, hotel_id)?;

            let query = ItemsQuery::new(name).filter_eq(HOTEL_ID_FIELD, hotel_id);
            let records = match self.client.read_items(&query).await {
                Ok(records) => records,
                Err(e) => {
                    tracing::error!("Verification of '{}' failed: {}", name, e);
                    writeln!(err, "Failed to read '{}': {}", name, e)?;
                    report.failed += 1;
                    continue;
                }
            };

            writeln!(out, "Found {} records", records.len())?;
            match records.first() {
                Some(first) => {
                    let pretty = serde_json::to_string_pretty(first).map_err(io::Error::other)?;
                    writeln!(out, "First record:\n{}", pretty)?;
                }
                None => writeln!(
                    out,
                    "WARNING: No data found in '{}' for hotel {}",
                    name, hotel_id
                )?,
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::server::{
        config::{DirectusConfig, DirectusEndpoint},
        startup::build_http_client,
    };

    fn client_for(url: Option<String>) -> DirectusClient {
        let config = DirectusConfig {
            endpoint: DirectusEndpoint::parse(url),
            token: None,
            timeout: Duration::from_secs(5),
        };
        DirectusClient::new(build_http_client(config.timeout).unwrap(), &config)
    }

    async fn run(
        client: &DirectusClient,
        collections: &[DirectoryCollection],
    ) -> (VerifyReport, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report = VerifyService::new(client)
            .run(1, collections, &mut out, &mut err)
            .await
            .unwrap();

        (
            report,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    /// Tests verification of populated collections.
    ///
    /// Verifies the count and the first record of each default collection are printed
    /// and only the requested hotel's records are counted.
    ///
    /// Expected: success with counts 2 and 1
    #[tokio::test]
    async fn prints_count_and_first_record() {
        let test = TestBuilder::new()
            .with_entry("transportation", factory::create_entry(1, "Airport shuttle"))
            .with_entry("transportation", factory::create_entry(1, "Taxi rank"))
            .with_entry("transportation", factory::create_entry(2, "Ferry"))
            .with_entry("local_places", factory::create_entry(1, "Old town"))
            .build()
            .await
            .unwrap();
        let client = client_for(Some(test.directus_url()));

        let (report, out, err) = run(&client, &DEFAULT_COLLECTIONS).await;

        assert!(report.succeeded());
        assert_eq!(report.checked, 2);
        assert!(out.contains("Found 2 records"));
        assert!(out.contains("Found 1 records"));
        assert!(out.contains("\"name\": \"Airport shuttle\""));
        assert!(!out.contains("Ferry"));
        assert!(err.is_empty());
    }

    /// Tests verification when no collection holds data for the hotel.
    ///
    /// Expected: one "No data found" line per collection, still a success
    #[tokio::test]
    async fn warns_when_no_data_found() {
        let test = TestBuilder::new()
            .with_collection("transportation")
            .with_collection("local_places")
            .build()
            .await
            .unwrap();
        let client = client_for(Some(test.directus_url()));

        let (report, out, _) = run(&client, &DEFAULT_COLLECTIONS).await;

        assert!(report.succeeded());
        assert_eq!(out.matches("No data found").count(), 2);
    }

    /// Tests that one failing collection does not stop the others.
    ///
    /// Expected: one failure reported on stderr, the other collection still printed
    #[tokio::test]
    async fn continues_after_failure() {
        let test = TestBuilder::new()
            .with_failure("transportation", 500, "Boom")
            .with_entry("local_places", factory::create_entry(1, "Old town"))
            .build()
            .await
            .unwrap();
        let client = client_for(Some(test.directus_url()));

        let (report, out, err) = run(&client, &DEFAULT_COLLECTIONS).await;

        assert!(!report.succeeded());
        assert_eq!(report.failed, 1);
        assert!(err.contains("Failed to read 'transportation'"));
        assert!(err.contains("Boom"));
        assert!(out.contains("Found 1 records"));
    }

    /// Tests verification without a configured endpoint.
    ///
    /// Expected: every collection fails with a not-configured message
    #[tokio::test]
    async fn missing_endpoint_fails_every_collection() {
        let client = client_for(None);

        let (report, _, err) = run(&client, &[DirectoryCollection::Dining]).await;

        assert_eq!(report.failed, 1);
        assert!(err.contains("not configured"));
    }
}
