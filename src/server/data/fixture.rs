use async_trait::async_trait;
use serde_json::json;

use crate::{
    model::{directory::DirectoryCollection, hotel::HotelStatus},
    server::{
        data::ContentSource,
        error::content::ContentError,
        model::{
            directory::DirectoryEntry,
            hotel::{Hotel, HotelFilter},
        },
    },
};

/// In-memory content source.
///
/// Serves a fixed set of hotels and entries, applying the same filtering rules as the
/// live source. Selected with `CONTENT_SOURCE=fixture` for development without a
/// content-management instance, and used by handler tests.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    hotels: Vec<Hotel>,
    entries: Vec<DirectoryEntry>,
}

impl FixtureSource {
    pub fn new(hotels: Vec<Hotel>, entries: Vec<DirectoryEntry>) -> Self {
        Self { hotels, entries }
    }

    /// Sample data for two hotels served on `localhost`-style domains.
    pub fn sample() -> Self {
        let hotels = vec![
            Hotel {
                id: 1,
                name: "Hotel Mirador".to_string(),
                domain: "mirador.localhost".to_string(),
                status: HotelStatus::Published,
                available_currencies: vec!["EUR".to_string(), "USD".to_string()],
                available_languages: vec![1, 2],
                pms_type: "opera".to_string(),
            },
            Hotel {
                id: 2,
                name: "Casa del Puerto".to_string(),
                domain: "puerto.localhost".to_string(),
                status: HotelStatus::Published,
                available_currencies: vec!["EUR".to_string()],
                available_languages: vec![1, 2, 3],
                pms_type: "mews".to_string(),
            },
        ];

        let records = [
            (
                DirectoryCollection::Transportation,
                json!({ "id": 1, "hotel_id": 1, "name": "Airport shuttle",
                        "description": "Every hour from **6:00** to **23:00** at the main entrance." }),
            ),
            (
                DirectoryCollection::Transportation,
                json!({ "id": 2, "hotel_id": 1, "name": "Taxi",
                        "description": "Ask reception to book a taxi." }),
            ),
            (
                DirectoryCollection::LocalPlaces,
                json!({ "id": 1, "hotel_id": 1, "name": "Old town viewpoint",
                        "description": "A 10 minute walk uphill." }),
            ),
            (
                DirectoryCollection::Dining,
                json!({ "id": 1, "hotel_id": 1, "name": "Terrace restaurant",
                        "description": "Breakfast 7:00-10:30, dinner 19:00-22:30." }),
            ),
            (
                DirectoryCollection::Services,
                json!({ "id": 1, "hotel_id": 1, "name": "Laundry",
                        "description": "Same-day service for items handed in before 9:00." }),
            ),
            (
                DirectoryCollection::Transportation,
                json!({ "id": 3, "hotel_id": 2, "name": "Ferry terminal",
                        "description": "Across the street from the hotel." }),
            ),
        ];

        let entries = records
            .into_iter()
            .filter_map(|(collection, record)| DirectoryEntry::from_record(collection, record))
            .collect();

        Self::new(hotels, entries)
    }
}

#[async_trait]
impl ContentSource for FixtureSource {
    async fn hotels(&self, filter: &HotelFilter) -> Result<Vec<Hotel>, ContentError> {
        Ok(self
            .hotels
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
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.hotel_id == hotel_id && entry.collection == collection)
            .cloned()
            .collect())
    }
}
