use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        directory::{DirectoryCollection, DirectoryEntryDto},
        hotel::HotelDto,
    },
    server::{
        error::AppError,
        middleware::tenant::TenantHost,
        model::{
            directory::{DirectoryEntry, GetDirectoryParam},
            hotel::{Hotel, ListHotelsParam},
        },
        service::{directory::DirectoryService, hotel::HotelService},
        state::AppState,
    },
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotel";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct HotelQuery {
    /// Only return hotels served under this domain.
    pub domain: Option<String>,
}

/// List hotels.
///
/// Returns every hotel known to the content source, or only the ones served under
/// `domain` when given. The domain is normalised the same way request hosts are.
///
/// # Arguments
/// - `state` - Application state containing the content source
/// - `query` - Optional domain filter
///
/// # Returns
/// - `200 OK` - Array of hotels, possibly empty
/// - `500 Internal Server Error` - Content source failure
#[utoipa::path(
    get,
    path = "/api/hotels",
    tag = HOTEL_TAG,
    params(HotelQuery),
    responses(
        (status = 200, description = "Successfully retrieved hotels", body = Vec<HotelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotels(
    State(state): State<AppState>,
    Query(query): Query<HotelQuery>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = HotelService::new(state.content.as_ref())
        .list(ListHotelsParam {
            domain: query.domain,
        })
        .await?;

    Ok(Json(
        hotels.into_iter().map(Hotel::into_dto).collect::<Vec<_>>(),
    ))
}

/// Get the hotel serving the current request.
///
/// Resolves the tenant from `X-Forwarded-Host`, falling back to `Host`.
///
/// # Returns
/// - `200 OK` - Hotel serving the request host
/// - `400 Bad Request` - Request carries no host
/// - `404 Not Found` - No hotel is served under the host
/// - `500 Internal Server Error` - Content source failure
#[utoipa::path(
    get,
    path = "/api/hotel",
    tag = HOTEL_TAG,
    responses(
        (status = 200, description = "Hotel serving the request host", body = HotelDto),
        (status = 400, description = "Request host is missing", body = ErrorDto),
        (status = 404, description = "No hotel serves the request host", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_hotel(
    State(state): State<AppState>,
    TenantHost(host): TenantHost,
) -> Result<impl IntoResponse, AppError> {
    let Some(hotel) = HotelService::new(state.content.as_ref())
        .get_by_host(&host)
        .await?
    else {
        return Err(AppError::NotFound(format!("No hotel found for host {}", host)));
    };

    Ok(Json(hotel.into_dto()))
}

/// Get the directory entries of a hotel.
///
/// # Arguments
/// - `id` - Hotel id
/// - `collection` - One of `dining`, `services`, `transportation`, `local_places`
///
/// # Returns
/// - `200 OK` - Entries of the collection, possibly empty
/// - `400 Bad Request` - Unknown collection
/// - `404 Not Found` - Hotel does not exist
/// - `500 Internal Server Error` - Content source failure
#[utoipa::path(
    get,
    path = "/api/hotels/{id}/directory/{collection}",
    tag = HOTEL_TAG,
    params(
        ("id" = i64, Path, description = "Hotel id"),
        ("collection" = DirectoryCollection, Path, description = "Directory collection")
    ),
    responses(
        (status = 200, description = "Successfully retrieved directory entries", body = Vec<DirectoryEntryDto>),
        (status = 400, description = "Unknown collection", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel_directory(
    State(state): State<AppState>,
    Path((hotel_id, collection)): Path<(i64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let collection = collection
        .parse::<DirectoryCollection>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let entries = DirectoryService::new(state.content.as_ref())
        .get_entries(GetDirectoryParam {
            hotel_id,
            collection,
        })
        .await?;

    Ok(Json(
        entries
            .into_iter()
            .map(DirectoryEntry::into_dto)
            .collect::<Vec<_>>(),
    ))
}
