//! Hotel (tenant) domain models and parameters.
//!
//! Hotels are owned by the content-management system; this service only reads them.

use serde::Deserialize;

use crate::{
    model::hotel::{HotelDto, HotelStatus},
    server::util::host::normalize_host,
};

/// PMS tag used when the upstream record leaves it blank.
pub const DEFAULT_PMS_TYPE: &str = "none";

/// Hotel served by the multitenant deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    /// Host the hotel's directory is served under.
    pub domain: String,
    pub status: HotelStatus,
    /// ISO 4217 currency codes in display order.
    pub available_currencies: Vec<String>,
    /// Language identifiers in display order.
    pub available_languages: Vec<i64>,
    /// Property-management-system tag.
    pub pms_type: String,
}

impl Hotel {
    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            domain: self.domain,
            status: self.status,
            available_currencies: self.available_currencies,
            available_languages: self.available_languages,
            pms_type: self.pms_type,
        }
    }

    /// Converts an upstream record at the data-source boundary.
    ///
    /// Currency codes are upper-cased and anything that is not a three-letter code is
    /// dropped; missing optional fields fall back to defaults.
    ///
    /// # Returns
    /// - `Some(Hotel)` - Record has a name, a domain and at least one currency code
    /// - `None` - Record is incomplete and cannot be served
    pub fn from_record(record: HotelRecord) -> Option<Self> {
        let name = record
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())?;
        let domain = record.domain.as_deref().and_then(normalize_host)?;

        let available_currencies: Vec<String> = record
            .avaliable_currencies
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.trim().to_ascii_uppercase())
            .filter(|c| is_currency_code(c))
            .collect();
        if available_currencies.is_empty() {
            return None;
        }

        Some(Self {
            id: record.id,
            name,
            domain,
            status: record.status.unwrap_or_default(),
            available_currencies,
            available_languages: record.avaliable_lenguages.unwrap_or_default(),
            pms_type: record
                .pms_type
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PMS_TYPE.to_string()),
        })
    }

    /// Whether this hotel is served under `host`, compared after normalisation.
    pub fn serves(&self, host: &str) -> bool {
        match normalize_host(host) {
            Some(host) => !self.domain.is_empty() && self.domain == host,
            None => false,
        }
    }
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Row of the upstream `hotels` collection.
///
/// Nullable upstream columns are optional here; `Hotel::from_record` decides whether
/// the row is complete enough to serve.
#[derive(Debug, Clone, Deserialize)]
pub struct HotelRecord {
    pub id: i64,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub status: Option<HotelStatus>,
    pub avaliable_currencies: Option<Vec<String>>,
    pub avaliable_lenguages: Option<Vec<i64>>,
    pub pms_type: Option<String>,
}

/// Filter for hotel lookups; all fields combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelFilter {
    pub id: Option<i64>,
    /// Normalised host the hotel must be served under.
    pub domain: Option<String>,
}

impl HotelFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            domain: None,
        }
    }

    /// Filter by host; `None` when the host is empty after normalisation.
    pub fn by_host(host: &str) -> Option<Self> {
        normalize_host(host).map(|domain| Self {
            id: None,
            domain: Some(domain),
        })
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        self.id.is_none_or(|id| hotel.id == id)
            && self
                .domain
                .as_deref()
                .is_none_or(|domain| hotel.serves(domain))
    }
}

/// Parameters for listing hotels.
#[derive(Debug, Clone, Default)]
pub struct ListHotelsParam {
    /// Optional host filter, as given by the caller.
    pub domain: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    fn record() -> HotelRecord {
        HotelRecord {
            id: 3,
            name: Some(" Harbour View ".to_string()),
            domain: Some("WWW.Harbour.test".to_string()),
            status: Some(HotelStatus::Published),
            avaliable_currencies: Some(vec![
                "eur".to_string(),
                " ".to_string(),
                "EU".to_string(),
                "EURO".to_string(),
                "€UR".to_string(),
            ]),
            avaliable_lenguages: Some(vec![1, 4]),
            pms_type: None,
        }
    }

    /// Expected: upstream values are normalised on the way in
    #[test]
    fn from_record_normalises() {
        let hotel = Hotel::from_record(record()).unwrap();

        assert_eq!(hotel.name, "Harbour View");
        assert_eq!(hotel.domain, "harbour.test");
        assert_eq!(hotel.available_currencies, vec!["EUR".to_string()]);
        assert_eq!(hotel.available_languages, vec![1, 4]);
        assert_eq!(hotel.pms_type, DEFAULT_PMS_TYPE);
    }

    /// Expected: serves() ignores port, case and www prefix
    #[test]
    fn serves_matches_normalised_host() {
        let hotel = Hotel::from_record(record()).unwrap();

        assert!(hotel.serves("harbour.test:8080"));
        assert!(hotel.serves("www.HARBOUR.test"));
        assert!(!hotel.serves("other.test"));
        assert!(!hotel.serves(""));
    }

    /// Tests records missing a field every served hotel needs.
    ///
    /// Expected: None for a blank name, a missing or blank domain, and currencies with
    /// no valid three-letter code
    #[test]
    fn incomplete_record_is_rejected() {
        let mut blank_name = record();
        blank_name.name = Some("  ".to_string());
        let mut no_name = record();
        no_name.name = None;
        let mut no_domain = record();
        no_domain.domain = None;
        let mut blank_domain = record();
        blank_domain.domain = Some(" https:// ".to_string());
        let mut no_currencies = record();
        no_currencies.avaliable_currencies = None;
        let mut bad_currencies = record();
        bad_currencies.avaliable_currencies = Some(vec!["EU".to_string(), "EURO".to_string()]);

        for record in [
            blank_name,
            no_name,
            no_domain,
            blank_domain,
            no_currencies,
            bad_currencies,
        ] {
            assert_eq!(Hotel::from_record(record), None);
        }
    }

    /// Expected: unknown status strings decode as Unknown
    #[test]
    fn unknown_status_is_tolerated() {
        let record: HotelRecord = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Inn",
            "status": "under_review"
        }))
        .unwrap();

        assert_eq!(record.status, Some(HotelStatus::Unknown));
    }

    /// Expected: filter fields combine with AND
    #[test]
    fn filter_combines_fields() {
        let hotel = Hotel::from_record(record()).unwrap();

        assert!(HotelFilter::all().matches(&hotel));
        assert!(HotelFilter::by_id(3).matches(&hotel));
        assert!(!HotelFilter::by_id(4).matches(&hotel));
        assert!(HotelFilter::by_host("harbour.test").unwrap().matches(&hotel));

        let filter = HotelFilter {
            id: Some(4),
            domain: Some("harbour.test".to_string()),
        };
        assert!(!filter.matches(&hotel));
    }
}
