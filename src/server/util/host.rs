/// Normalises a host or domain for tenant matching.
///
/// Lower-cases the value, strips any scheme, path, port and trailing dot, and drops a
/// leading `www.` so `WWW.Hotel.com:443` and `hotel.com` resolve to the same tenant.
///
/// # Returns
/// - `Some(String)` - Normalised host
/// - `None` - Value is empty after normalisation
pub fn normalize_host(value: &str) -> Option<String> {
    let value = value.trim();
    let value = value
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(value);
    let value = value.split(['/', '?', '#']).next().unwrap_or_default();

    // Bracketed IPv6 literals keep their colons
    let host = if let Some(rest) = value.strip_prefix('[') {
        rest.split(']').next().unwrap_or_default()
    } else {
        value.split(':').next().unwrap_or_default()
    };

    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let host = host.strip_prefix("www.").map(str::to_string).unwrap_or(host);

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strips_port_and_case() {
        assert_eq!(
            normalize_host("Grand-Hotel.Example.com:8080"),
            Some("grand-hotel.example.com".to_string())
        );
    }

    #[test]
    fn strips_www_scheme_and_path() {
        assert_eq!(
            normalize_host("https://www.seaside.test/dining?x=1"),
            Some("seaside.test".to_string())
        );
        assert_eq!(normalize_host("seaside.test."), Some("seaside.test".to_string()));
    }

    #[test]
    fn keeps_ipv6_literal() {
        assert_eq!(normalize_host("[::1]:3000"), Some("::1".to_string()));
    }

    #[test]
    fn empty_host_is_none() {
        assert_eq!(normalize_host("   "), None);
        assert_eq!(normalize_host(":8080"), None);
    }
}
