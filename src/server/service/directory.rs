use dioxus_logger::tracing;

use crate::server::{
    data::ContentSource,
    error::AppError,
    model::directory::{DirectoryEntry, GetDirectoryParam},
    service::hotel::HotelService,
};

pub struct DirectoryService<'a> {
    source: &'a dyn ContentSource,
}

impl<'a> DirectoryService<'a> {
    pub fn new(source: &'a dyn ContentSource) -> Self {
        Self { source }
    }

    /// Gets the entries of one directory collection for a hotel.
    ///
    /// Entries whose `hotel_id` differs from the requested hotel are dropped, so a
    /// misbehaving source can never leak another tenant's content.
    ///
    /// # Returns
    /// - `Ok(Vec<DirectoryEntry>)` - Entries of the collection, possibly empty
    /// - `Err(AppError::NotFound)` - Hotel does not exist
    /// - `Err(AppError::ContentErr)` - Content source failure
    pub async fn get_entries(&self, param: GetDirectoryParam) -> Result<Vec<DirectoryEntry>, AppError> {
        if HotelService::new(self.source)
            .get_by_id(param.hotel_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Hotel {} not found",
                param.hotel_id
            )));
        }

        let entries = self
            .source
            .directory_entries(param.hotel_id, param.collection)
            .await?;

        let total = entries.len();
        let entries: Vec<DirectoryEntry> = entries
            .into_iter()
            .filter(|entry| entry.hotel_id == param.hotel_id && entry.collection == param.collection)
            .collect();

        if entries.len() != total {
            tracing::warn!(
                "Dropped {} {} entries not belonging to hotel {}",
                total - entries.len(),
                param.collection,
                param.hotel_id
            );
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::{
        model::directory::DirectoryCollection,
        server::{
            data::FixtureSource,
            error::content::ContentError,
            model::hotel::{Hotel, HotelFilter, HotelRecord},
            service::test_support::FailingSource,
        },
    };

    fn hotel(id: i64, domain: &str) -> Hotel {
        Hotel::from_record(HotelRecord {
            id,
            name: Some(format!("Hotel {}", id)),
            domain: Some(domain.to_string()),
            status: None,
            avaliable_currencies: Some(vec!["EUR".to_string()]),
            avaliable_lenguages: Some(vec![1]),
            pms_type: None,
        })
        .unwrap()
    }

    fn entry(id: &str, hotel_id: i64, collection: DirectoryCollection) -> DirectoryEntry {
        DirectoryEntry::from_record(collection, json!({ "id": id, "hotel_id": hotel_id, "name": id }))
            .unwrap()
    }

    /// Tests fetching a populated collection.
    ///
    /// Expected: Ok with the two transportation entries of hotel 1
    #[tokio::test]
    async fn gets_entries_for_hotel() {
        let source = FixtureSource::sample();

        let entries = DirectoryService::new(&source)
            .get_entries(GetDirectoryParam {
                hotel_id: 1,
                collection: DirectoryCollection::Transportation,
            })
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.hotel_id == 1));
    }

    /// Tests an existing hotel with an empty collection.
    ///
    /// Expected: Ok with an empty list
    #[tokio::test]
    async fn empty_collection_is_not_an_error() {
        let source = FixtureSource::sample();

        let entries = DirectoryService::new(&source)
            .get_entries(GetDirectoryParam {
                hotel_id: 2,
                collection: DirectoryCollection::Dining,
            })
            .await
            .unwrap();

        assert!(entries.is_empty());
    }

    /// Tests fetching entries for a hotel that does not exist.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn unknown_hotel_is_not_found() {
        let source = FixtureSource::sample();

        let result = DirectoryService::new(&source)
            .get_entries(GetDirectoryParam {
                hotel_id: 42,
                collection: DirectoryCollection::Dining,
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    /// Tests that entries of other tenants never leak.
    ///
    /// Verifies that a source returning another hotel's entry for hotel 1 has
    /// that entry filtered out.
    ///
    /// Expected: Ok with only hotel 1's entry
    #[tokio::test]
    async fn drops_entries_of_other_hotels() {
        let source = LeakySource {
            inner: FixtureSource::new(
                vec![hotel(1, "one.test"), hotel(2, "two.test")],
                vec![
                    entry("own", 1, DirectoryCollection::Services),
                    entry("foreign", 2, DirectoryCollection::Services),
                ],
            ),
        };

        let entries = DirectoryService::new(&source)
            .get_entries(GetDirectoryParam {
                hotel_id: 1,
                collection: DirectoryCollection::Services,
            })
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "own");
    }

    /// Tests content failure propagation.
    ///
    /// Expected: Err(AppError::ContentErr)
    #[tokio::test]
    async fn propagates_content_failure() {
        let result = DirectoryService::new(&FailingSource)
            .get_entries(GetDirectoryParam {
                hotel_id: 1,
                collection: DirectoryCollection::Dining,
            })
            .await;

        assert!(matches!(result, Err(AppError::ContentErr(_))));
    }

    /// Source that ignores the tenant when returning entries.
    struct LeakySource {
        inner: FixtureSource,
    }

    #[async_trait::async_trait]
    impl ContentSource for LeakySource {
        async fn hotels(&self, filter: &HotelFilter) -> Result<Vec<Hotel>, ContentError> {
            self.inner.hotels(filter).await
        }

        async fn directory_entries(
            &self,
            _hotel_id: i64,
            collection: DirectoryCollection,
        ) -> Result<Vec<DirectoryEntry>, ContentError> {
            let mut all = self.inner.directory_entries(1, collection).await?;
            all.extend(self.inner.directory_entries(2, collection).await?);
            Ok(all)
        }
    }
}
