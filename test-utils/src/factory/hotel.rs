//! Hotel record factory.

use serde_json::{json, Value};

use crate::{factory::helpers::next_id, fixture::hotel as defaults};

/// Factory for hotel records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let record = HotelFactory::new()
///     .id(7)
///     .name("Seaside Inn")
///     .domain("seaside.test")
///     .status("draft")
///     .build();
/// ```
pub struct HotelFactory {
    id: i64,
    name: String,
    domain: String,
    status: String,
    currencies: Vec<String>,
    languages: Vec<i64>,
    pms_type: String,
}

impl HotelFactory {
    /// Creates a factory with a unique id and a domain derived from it.
    pub fn new() -> Self {
        let id = next_id() as i64;

        Self {
            id,
            name: format!("{} {}", defaults::DEFAULT_NAME, id),
            domain: format!("hotel-{}.test", id),
            status: defaults::DEFAULT_STATUS.to_string(),
            currencies: defaults::DEFAULT_CURRENCIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            languages: defaults::DEFAULT_LANGUAGES.to_vec(),
            pms_type: defaults::DEFAULT_PMS_TYPE.to_string(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn currencies(mut self, currencies: &[&str]) -> Self {
        self.currencies = currencies.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn languages(mut self, languages: &[i64]) -> Self {
        self.languages = languages.to_vec();
        self
    }

    pub fn pms_type(mut self, pms_type: &str) -> Self {
        self.pms_type = pms_type.to_string();
        self
    }

    /// Builds the record using the upstream field names.
    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "domain": self.domain,
            "status": self.status,
            "avaliable_currencies": self.currencies,
            "avaliable_lenguages": self.languages,
            "pms_type": self.pms_type,
        })
    }
}

impl Default for HotelFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a hotel record with the given id and domain and defaults elsewhere.
pub fn create_hotel(id: i64, domain: &str) -> Value {
    HotelFactory::new().id(id).domain(domain).build()
}
