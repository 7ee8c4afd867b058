use std::collections::HashMap;

use async_trait::async_trait;
use dioxus_logger::tracing;
use tokio::sync::{OnceCell, RwLock};

use crate::{
    model::directory::DirectoryCollection,
    server::{
        data::ContentSource,
        error::content::ContentError,
        model::{
            directory::DirectoryEntry,
            hotel::{Hotel, HotelFilter},
        },
    },
};

/// Content source that keeps the first successful result of its inner source.
///
/// Backs static rendering mode: content is resolved once and every later page render
/// sees the same data for the lifetime of the process. Failed loads are not stored, so
/// the next request tries again.
pub struct SnapshotSource<S> {
    inner: S,
    hotels: OnceCell<Vec<Hotel>>,
    entries: RwLock<HashMap<(i64, DirectoryCollection), Vec<DirectoryEntry>>>,
}

impl<S: ContentSource> SnapshotSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            hotels: OnceCell::new(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: ContentSource> ContentSource for SnapshotSource<S> {
    async fn hotels(&self, filter: &HotelFilter) -> Result<Vec<Hotel>, ContentError> {
        let hotels = self
            .hotels
            .get_or_try_init(|| async {
                let hotels = self.inner.hotels(&HotelFilter::all()).await?;
                tracing::info!("Captured content snapshot of {} hotel(s)", hotels.len());
                Ok::<_, ContentError>(hotels)
            })
            .await?;

        Ok(hotels
            .iter()
            .filter(|hotel| filter.matches(hotel))
            .cloned()
            .collect())
    }

    async fn directory_entries(
        &self,
        hotel_id: i64,
        collection: DirectoryCollection,
    ) -> Result<Vec<DirectoryEntry>, ContentError> {
        let key = (hotel_id, collection);

        if let Some(entries) = self.entries.read().await.get(&key) {
            return Ok(entries.clone());
        }

        let entries = self.inner.directory_entries(hotel_id, collection).await?;

        // Another request may have filled the slot meanwhile; keep whichever came first.
        Ok(self
            .entries
            .write()
            .await
            .entry(key)
            .or_insert(entries)
            .clone())
    }
}
