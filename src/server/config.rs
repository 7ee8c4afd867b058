//! Environment-based application configuration.
//!
//! `Config` is assembled once at startup and shared read-only through `AppState`. Nothing
//! else in the server reads the environment. Both rendering modes go through the same
//! option resolution (`SiteOptions::resolve`) so static and server deployments cannot drift.

use std::{fmt, str::FromStr, time::Duration};

use url::Url;

use crate::server::error::{config::ConfigError, content::ContentError, AppError};

const DEFAULT_SITE_URL_PRODUCTION: &str = "https://guestdirectory.app";
const DEFAULT_SITE_URL_DEVELOPMENT: &str = "http://localhost:8080";
const DEFAULT_DIRECTUS_TIMEOUT_SECS: u64 = 10;

/// Deployment environment, selected by `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// Anything other than `production` is treated as development.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

/// Whether pages are generated once (static) or per request (server).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    Static,
    #[default]
    Server,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "server" | "standalone" => Ok(Self::Server),
            _ => Err("expected 'static' or 'server'".to_string()),
        }
    }
}

/// Which `ContentSource` implementation backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentSourceKind {
    #[default]
    Directus,
    Fixture,
}

impl FromStr for ContentSourceKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "directus" => Ok(Self::Directus),
            "fixture" => Ok(Self::Fixture),
            _ => Err("expected 'directus' or 'fixture'".to_string()),
        }
    }
}

/// Credentials for the auxiliary data store used by static builds.
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

/// Options shared by both rendering modes.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteOptions {
    pub render_mode: RenderMode,
    /// Public base URL of the site for the current environment.
    pub site_url: String,
    /// Only carried in static mode; server deployments never expose these.
    pub supabase: Option<SupabaseConfig>,
}

impl SiteOptions {
    /// Resolves site options for a rendering mode.
    ///
    /// # Arguments
    /// - `render_mode` - Selected rendering mode
    /// - `environment` - Deployment environment choosing the site base URL
    /// - `lookup` - Environment lookup for overrides and credentials
    pub fn resolve<F>(render_mode: RenderMode, environment: Environment, lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let site_url = match environment {
            Environment::Production => lookup("SITE_URL_PRODUCTION")
                .unwrap_or_else(|| DEFAULT_SITE_URL_PRODUCTION.to_string()),
            Environment::Development => lookup("SITE_URL_DEVELOPMENT")
                .unwrap_or_else(|| DEFAULT_SITE_URL_DEVELOPMENT.to_string()),
        };

        let supabase = match render_mode {
            RenderMode::Static => match (lookup("SUPABASE_URL"), lookup("SUPABASE_ANON_KEY")) {
                (Some(url), Some(anon_key)) => Some(SupabaseConfig { url, anon_key }),
                _ => None,
            },
            RenderMode::Server => None,
        };

        Self {
            render_mode,
            site_url,
            supabase,
        }
    }
}

/// State of the configured content-management URL.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectusEndpoint {
    Configured(Url),
    Missing,
    Invalid { value: String, reason: String },
}

impl DirectusEndpoint {
    /// Parses a base URL, normalising the path to end with `/` so relative joins
    /// keep any path prefix the endpoint is mounted under.
    pub fn parse(value: Option<String>) -> Self {
        let Some(value) = value else {
            return Self::Missing;
        };

        match Url::parse(&value) {
            Ok(url) if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") => {
                Self::Invalid {
                    value,
                    reason: "expected an http(s) URL".to_string(),
                }
            }
            Ok(mut url) => {
                if !url.path().ends_with('/') {
                    let path = format!("{}/", url.path());
                    url.set_path(&path);
                }
                Self::Configured(url)
            }
            Err(e) => Self::Invalid {
                value,
                reason: e.to_string(),
            },
        }
    }

    /// Returns the base URL or the reason content requests cannot be made.
    pub fn url(&self) -> Result<&Url, ContentError> {
        match self {
            Self::Configured(url) => Ok(url),
            Self::Missing => Err(ContentError::NotConfigured(
                "DIRECTUS_URL is not set".to_string(),
            )),
            Self::Invalid { value, reason } => Err(ContentError::NotConfigured(format!(
                "'{}' is not a valid URL ({})",
                value, reason
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectusConfig {
    pub endpoint: DirectusEndpoint,
    pub token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub environment: Environment,
    pub site: SiteOptions,
    pub directus: DirectusConfig,
    pub content_source: ContentSourceKind,
    pub version: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. `DIRECTUS_PUBLIC_URL` takes precedence over
    /// `DIRECTUS_URL`.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration assembled; the content URL may still be unusable
    /// - `Err(AppError::ConfigErr)` - An option without a fallback has an invalid value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let environment = Environment::from_node_env(lookup("NODE_ENV").as_deref());
        let render_mode = parse_var(&lookup, "RENDER_MODE")?.unwrap_or_default();
        let content_source = parse_var(&lookup, "CONTENT_SOURCE")?.unwrap_or_default();

        let timeout_secs = match lookup("DIRECTUS_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "DIRECTUS_TIMEOUT_SECS".to_string(),
                        value,
                        reason: "expected a positive number of seconds".to_string(),
                    }
                    .into())
                }
            },
            None => DEFAULT_DIRECTUS_TIMEOUT_SECS,
        };

        let directus = DirectusConfig {
            endpoint: DirectusEndpoint::parse(
                lookup("DIRECTUS_PUBLIC_URL").or_else(|| lookup("DIRECTUS_URL")),
            ),
            token: lookup("DIRECTUS_ADMIN_TOKEN"),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            environment,
            site: SiteOptions::resolve(render_mode, environment, &lookup),
            directus,
            content_source,
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr<Err = String>,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|reason| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value,
                    reason,
                })
        })
        .transpose()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    /// Expected: empty environment yields development/server defaults
    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.site.render_mode, RenderMode::Server);
        assert_eq!(config.site.site_url, DEFAULT_SITE_URL_DEVELOPMENT);
        assert_eq!(config.content_source, ContentSourceKind::Directus);
        assert_eq!(config.directus.endpoint, DirectusEndpoint::Missing);
        assert_eq!(config.directus.timeout, Duration::from_secs(10));
    }

    /// Expected: public URL wins over the private one
    #[test]
    fn public_url_takes_precedence() {
        let config = config_from(&[
            ("DIRECTUS_URL", "http://directus.internal:8055"),
            ("DIRECTUS_PUBLIC_URL", "https://cms.example.com"),
        ])
        .unwrap();

        let url = config.directus.endpoint.url().unwrap();
        assert_eq!(url.as_str(), "https://cms.example.com/");
    }

    /// Expected: base path gets a trailing slash so joins keep the prefix
    #[test]
    fn endpoint_path_is_normalised() {
        let endpoint = DirectusEndpoint::parse(Some("https://example.com/cms".to_string()));

        let url = endpoint.url().unwrap();
        assert_eq!(url.join("items/hotels").unwrap().path(), "/cms/items/hotels");
    }

    /// Expected: malformed URL does not fail startup, only content requests
    #[test]
    fn malformed_url_fails_per_request() {
        let config = config_from(&[("DIRECTUS_URL", "not a url")]).unwrap();

        assert!(matches!(
            config.directus.endpoint,
            DirectusEndpoint::Invalid { .. }
        ));
        assert!(matches!(
            config.directus.endpoint.url(),
            Err(ContentError::NotConfigured(_))
        ));
    }

    /// Expected: non-http schemes are rejected as invalid endpoints
    #[test]
    fn non_http_scheme_is_invalid() {
        let endpoint = DirectusEndpoint::parse(Some("mailto:cms@example.com".to_string()));

        assert!(matches!(endpoint, DirectusEndpoint::Invalid { .. }));
    }

    /// Expected: blank values behave as unset
    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[("DIRECTUS_URL", "   "), ("RENDER_MODE", "")]).unwrap();

        assert_eq!(config.directus.endpoint, DirectusEndpoint::Missing);
        assert_eq!(config.site.render_mode, RenderMode::Server);
    }

    /// Expected: production env picks the production site URL, overridable
    #[test]
    fn production_site_url() {
        let config = config_from(&[("NODE_ENV", "production")]).unwrap();
        assert_eq!(config.site.site_url, DEFAULT_SITE_URL_PRODUCTION);

        let config = config_from(&[
            ("NODE_ENV", "production"),
            ("SITE_URL_PRODUCTION", "https://guide.hotel.test"),
        ])
        .unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.site.site_url, "https://guide.hotel.test");
    }

    /// Expected: supabase credentials only carried in static mode
    #[test]
    fn supabase_only_in_static_mode() {
        let vars = [
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ];

        let server = config_from(&vars).unwrap();
        assert_eq!(server.site.supabase, None);

        let mut static_vars = vars.to_vec();
        static_vars.push(("RENDER_MODE", "static"));
        let static_config = config_from(&static_vars).unwrap();
        assert_eq!(static_config.site.render_mode, RenderMode::Static);
        assert_eq!(
            static_config.site.supabase,
            Some(SupabaseConfig {
                url: "https://abc.supabase.co".to_string(),
                anon_key: "anon".to_string(),
            })
        );
    }

    /// Expected: unknown render mode is a startup error
    #[test]
    fn invalid_render_mode_is_rejected() {
        let result = config_from(&[("RENDER_MODE", "hybrid")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    /// Expected: zero or non-numeric timeout is a startup error
    #[test]
    fn invalid_timeout_is_rejected() {
        assert!(config_from(&[("DIRECTUS_TIMEOUT_SECS", "0")]).is_err());
        assert!(config_from(&[("DIRECTUS_TIMEOUT_SECS", "soon")]).is_err());

        let config = config_from(&[("DIRECTUS_TIMEOUT_SECS", "3")]).unwrap();
        assert_eq!(config.directus.timeout, Duration::from_secs(3));
    }

    /// Expected: fixture content source selectable
    #[test]
    fn fixture_content_source() {
        let config = config_from(&[("CONTENT_SOURCE", "Fixture")]).unwrap();

        assert_eq!(config.content_source, ContentSourceKind::Fixture);
    }
}
