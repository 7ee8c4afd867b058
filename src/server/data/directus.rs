use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::{
    model::directory::DirectoryCollection,
    server::{
        content::{DirectusClient, ItemsQuery},
        data::ContentSource,
        error::content::ContentError,
        model::{
            directory::DirectoryEntry,
            hotel::{Hotel, HotelFilter, HotelRecord},
        },
    },
};

/// Upstream collection holding hotels.
pub const HOTELS_COLLECTION: &str = "hotels";

/// Foreign-key field linking directory entries to their hotel.
pub const HOTEL_ID_FIELD: &str = "hotel_id";

/// Live content source reading from Directus.
pub struct DirectusSource {
    client: DirectusClient,
}

impl DirectusSource {
    pub fn new(client: DirectusClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for DirectusSource {
    async fn hotels(&self, filter: &HotelFilter) -> Result<Vec<Hotel>, ContentError> {
        let mut query = ItemsQuery::new(HOTELS_COLLECTION).sort("id");
        if let Some(id) = filter.id {
            query = query.filter_eq("id", id);
        }

        let records = self.client.read_items(&query).await?;
        let total = records.len();

        let hotels: Vec<Hotel> = records
            .into_iter()
            .filter_map(|record| serde_json::from_value::<HotelRecord>(record).ok())
            .filter_map(Hotel::from_record)
            .collect();

        if hotels.len() < total {
            tracing::warn!(
                "Dropped {} incomplete record(s) from '{}'",
                total - hotels.len(),
                HOTELS_COLLECTION
            );
        }

        // Domains are matched after normalisation, which upstream equality cannot do
        Ok(hotels
            .into_iter()
            .filter(|hotel| filter.matches(hotel))
            .collect())
    }

    async fn directory_entries(
        &self,
        hotel_id: i64,
        collection: DirectoryCollection,
    ) -> Result<Vec<DirectoryEntry>, ContentError> {
        let query =
            ItemsQuery::new(collection.collection_name()).filter_eq(HOTEL_ID_FIELD, hotel_id);

        let records = self.client.read_items(&query).await?;
        let total = records.len();

        let entries: Vec<DirectoryEntry> = records
            .into_iter()
            .filter_map(|record| DirectoryEntry::from_record(collection, record))
            .collect();

        if entries.len() < total {
            tracing::warn!(
                "Dropped {} record(s) without a usable hotel_id from '{}'",
                total - entries.len(),
                collection
            );
        }

        Ok(entries)
    }
}
