use super::*;

/// Tests listing all sample hotels.
///
/// Expected: Ok with both sample hotels, in order
#[tokio::test]
async fn lists_all_sample_hotels() {
    let source = FixtureSource::sample();

    let hotels = source.hotels(&HotelFilter::all()).await.unwrap();

    assert_eq!(hotels.len(), 2);
    assert_eq!(hotels[0].id, 1);
    assert_eq!(hotels[1].id, 2);
}

/// Tests host filtering against sample domains.
///
/// Expected: Ok with only the hotel served under the host
#[tokio::test]
async fn filters_by_host() {
    let source = FixtureSource::sample();
    let filter = HotelFilter::by_host("WWW.Puerto.localhost:8080").unwrap();

    let hotels = source.hotels(&filter).await.unwrap();

    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].name, "Casa del Puerto");
}

/// Tests that entries are scoped to both tenant and collection.
///
/// Expected: Ok with the two transportation entries of hotel 1
#[tokio::test]
async fn entries_scoped_to_tenant_and_collection() {
    let source = FixtureSource::sample();

    let entries = source
        .directory_entries(1, DirectoryCollection::Transportation)
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.hotel_id == 1));
    assert!(entries
        .iter()
        .all(|e| e.collection == DirectoryCollection::Transportation));
}

/// Tests a tenant with nothing in a collection.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn empty_collection_is_ok() {
    let source = FixtureSource::sample();

    let entries = source
        .directory_entries(2, DirectoryCollection::Dining)
        .await
        .unwrap();

    assert!(entries.is_empty());
}
