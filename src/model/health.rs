use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    /// Always `"healthy"` in a successful response.
    pub status: String,
    /// RFC 3339 / ISO-8601 timestamp of the check.
    pub timestamp: String,
    /// Process uptime in seconds.
    pub uptime: f64,
    pub environment: String,
    pub version: String,
    pub render_mode: String,
    pub platform: PlatformDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PlatformDto {
    pub os: String,
    pub arch: String,
    pub family: String,
    pub pid: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UnhealthyDto {
    /// Always `"unhealthy"`.
    pub status: String,
    pub error: String,
    pub timestamp: String,
}
