use std::{sync::Arc, time::Duration};

use dioxus_logger::tracing;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::{Config, ContentSourceKind, DirectusEndpoint, RenderMode},
    content::DirectusClient,
    data::{ContentSource, DirectusSource, FixtureSource, SnapshotSource},
    error::AppError,
};

/// Builds the HTTP client used for content requests.
///
/// Redirects are not followed and every request is bounded by `timeout`.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client ready for use
/// - `Err(reqwest::Error)` - TLS backend could not be initialised
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!("hotel-directory/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Builds the HTTP client from application configuration.
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    Ok(build_http_client(config.directus.timeout)?)
}

/// Selects the content source from configuration.
///
/// `CONTENT_SOURCE` picks the fixture or the live Directus source; static rendering
/// mode wraps either in a `SnapshotSource`.
pub fn build_content_source(config: &Config, http_client: reqwest::Client) -> Arc<dyn ContentSource> {
    match (config.content_source, config.site.render_mode) {
        (ContentSourceKind::Fixture, RenderMode::Server) => Arc::new(FixtureSource::sample()),
        (ContentSourceKind::Fixture, RenderMode::Static) => {
            Arc::new(SnapshotSource::new(FixtureSource::sample()))
        }
        (ContentSourceKind::Directus, render_mode) => {
            let source = DirectusSource::new(DirectusClient::new(http_client, &config.directus));
            match render_mode {
                RenderMode::Server => Arc::new(source),
                RenderMode::Static => Arc::new(SnapshotSource::new(source)),
            }
        }
    }
}

/// CORS for the JSON API; pages are same-origin.
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any)
}

/// Logs the resolved configuration, warning about a content endpoint that will fail
/// every request.
pub fn log_configuration(config: &Config) {
    tracing::info!(
        "Environment: {}, render mode: {}, site URL: {}",
        config.environment.as_str(),
        config.site.render_mode,
        config.site.site_url
    );

    if let Some(supabase) = &config.site.supabase {
        tracing::info!("Auxiliary store: {}", supabase.url);
    }

    if config.content_source == ContentSourceKind::Fixture {
        tracing::info!("Serving fixture content");
        return;
    }

    match &config.directus.endpoint {
        DirectusEndpoint::Configured(url) => {
            tracing::info!("Content endpoint: {}", url);
            if config.directus.token.is_none() {
                tracing::warn!("DIRECTUS_ADMIN_TOKEN is not set, content requests are anonymous");
            }
        }
        DirectusEndpoint::Missing => {
            tracing::warn!("DIRECTUS_URL is not set, content requests will fail");
        }
        DirectusEndpoint::Invalid { value, reason } => {
            tracing::warn!(
                "DIRECTUS_URL '{}' is invalid ({}), content requests will fail",
                value,
                reason
            );
        }
    }
}
