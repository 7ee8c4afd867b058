use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Publication state of a hotel in the content-management system.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HotelStatus {
    Draft,
    Published,
    Archived,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A hotel (tenant) as exposed by `/api/hotels`.
///
/// The currency and language fields keep the upstream spelling on the wire since
/// existing consumers of the API read them under those names.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct HotelDto {
    pub id: i64,
    pub name: String,
    pub domain: String,
    pub status: HotelStatus,
    #[serde(rename = "avaliable_currencies")]
    pub available_currencies: Vec<String>,
    #[serde(rename = "avaliable_lenguages")]
    pub available_languages: Vec<i64>,
    pub pms_type: String,
}
