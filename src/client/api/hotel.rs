use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::{
        directory::{DirectoryCollection, DirectoryEntryDto},
        hotel::HotelDto,
    },
};

/// Hotel serving the host the page was loaded from.
pub async fn get_current_hotel() -> Result<HotelDto, ApiError> {
    let response = send_request(get("/api/hotel")).await?;
    parse_response(response).await
}

pub async fn get_hotel_directory(
    hotel_id: i64,
    collection: DirectoryCollection,
) -> Result<Vec<DirectoryEntryDto>, ApiError> {
    let url = format!(
        "/api/hotels/{}/directory/{}",
        hotel_id,
        collection.collection_name()
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
