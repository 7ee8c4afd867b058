use axum::{
    extract::FromRequestParts,
    http::{header::HOST, request::Parts, HeaderMap},
};

use crate::server::{error::AppError, util::host::normalize_host};

/// Header set by reverse proxies carrying the host the client asked for.
pub const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Normalised host of the current request, identifying the tenant.
///
/// `X-Forwarded-Host` wins over `Host` since the application runs behind a proxy in
/// production. Only the first value of a comma-separated forwarded list is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantHost(pub String);

impl TenantHost {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let forwarded = headers
            .get(X_FORWARDED_HOST)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next());
        let host = headers.get(HOST).and_then(|value| value.to_str().ok());

        forwarded
            .and_then(normalize_host)
            .or_else(|| host.and_then(normalize_host))
            .map(Self)
    }
}

impl<S> FromRequestParts<S> for TenantHost
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers)
            .ok_or_else(|| AppError::BadRequest("Request host is missing".to_string()))
    }
}

#[cfg(test)]
mod test {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_static(value));
        }
        headers
    }

    /// Tests host resolution from the `Host` header.
    ///
    /// Expected: normalised host without port or `www.`
    #[test]
    fn uses_host_header() {
        let host = TenantHost::from_headers(&headers(&[("host", "www.Mirador.localhost:8080")]));

        assert_eq!(host, Some(TenantHost("mirador.localhost".to_string())));
    }

    /// Tests that the forwarded host takes precedence.
    ///
    /// Expected: first forwarded host
    #[test]
    fn prefers_forwarded_host() {
        let host = TenantHost::from_headers(&headers(&[
            ("host", "internal:3000"),
            ("x-forwarded-host", "puerto.localhost, proxy.internal"),
        ]));

        assert_eq!(host, Some(TenantHost("puerto.localhost".to_string())));
    }

    /// Tests fallback when the forwarded host is blank.
    ///
    /// Expected: `Host` header is used
    #[test]
    fn falls_back_on_blank_forwarded_host() {
        let host = TenantHost::from_headers(&headers(&[
            ("host", "mirador.localhost"),
            ("x-forwarded-host", " "),
        ]));

        assert_eq!(host, Some(TenantHost("mirador.localhost".to_string())));
    }

    /// Tests a request with no host information.
    ///
    /// Expected: None
    #[test]
    fn missing_host_is_none() {
        assert_eq!(TenantHost::from_headers(&HeaderMap::new()), None);
    }
}
