use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{
    model::directory::DirectoryCollection,
    server::{
        data::{ContentSource, FixtureSource},
        error::content::ContentError,
        model::{
            directory::DirectoryEntry,
            hotel::{Hotel, HotelFilter},
        },
    },
};

mod fixture;

/// Wraps the sample fixture, counting calls and failing the first `fail_first` of them.
struct CountingSource {
    inner: FixtureSource,
    calls: AtomicUsize,
    fail_first: usize,
}

impl CountingSource {
    fn new(fail_first: usize) -> Self {
        Self {
            inner: FixtureSource::sample(),
            calls: AtomicUsize::new(0),
            fail_first,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_call(&self) -> Result<(), ContentError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.fail_first {
            return Err(ContentError::NotConfigured("simulated outage".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentSource for CountingSource {
    async fn hotels(&self, filter: &HotelFilter) -> Result<Vec<Hotel>, ContentError> {
        self.next_call()?;
        self.inner.hotels(filter).await
    }

    async fn directory_entries(
        &self,
        hotel_id: i64,
        collection: DirectoryCollection,
    ) -> Result<Vec<DirectoryEntry>, ContentError> {
        self.next_call()?;
        self.inner.directory_entries(hotel_id, collection).await
    }
}
