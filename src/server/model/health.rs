//! Health report domain model.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::model::health::{HealthDto, PlatformDto, UnhealthyDto};

/// Status string of a successful health check.
pub const STATUS_HEALTHY: &str = "healthy";

/// Status string of a failed health check.
pub const STATUS_UNHEALTHY: &str = "unhealthy";

#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    pub timestamp: DateTime<Utc>,
    pub uptime_secs: f64,
    pub environment: String,
    pub version: String,
    pub render_mode: String,
    pub platform: Platform,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
    pub family: String,
    pub pid: u32,
}

impl Platform {
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            family: std::env::consts::FAMILY.to_string(),
            pid: std::process::id(),
        }
    }
}

impl HealthReport {
    pub fn into_dto(self) -> HealthDto {
        HealthDto {
            status: STATUS_HEALTHY.to_string(),
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: self.uptime_secs,
            environment: self.environment,
            version: self.version,
            render_mode: self.render_mode,
            platform: PlatformDto {
                os: self.platform.os,
                arch: self.platform.arch,
                family: self.platform.family,
                pid: self.platform.pid,
            },
        }
    }
}

/// Builds the body of an unhealthy response.
///
/// Uses `Utc::now()` directly since the injected clock may be the thing that failed.
pub fn unhealthy_dto(error: String) -> UnhealthyDto {
    UnhealthyDto {
        status: STATUS_UNHEALTHY.to_string(),
        error,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
