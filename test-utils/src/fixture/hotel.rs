//! Hotel fixtures.

use serde_json::{json, Value};

/// Default hotel name prefix.
pub const DEFAULT_NAME: &str = "Test Hotel";

/// Default publication status.
pub const DEFAULT_STATUS: &str = "published";

/// Default currencies offered.
pub const DEFAULT_CURRENCIES: [&str; 2] = ["EUR", "USD"];

/// Default language identifiers offered.
pub const DEFAULT_LANGUAGES: [i64; 2] = [1, 2];

/// Default property-management-system tag.
pub const DEFAULT_PMS_TYPE: &str = "opera";

/// Fixed id of the `record()` fixture.
pub const FIXTURE_ID: i64 = 1;

/// Fixed domain of the `record()` fixture.
pub const FIXTURE_DOMAIN: &str = "seaside.test";

/// A complete, published hotel record with a stable id and domain.
pub fn record() -> Value {
    json!({
        "id": FIXTURE_ID,
        "name": "Seaside Test Hotel",
        "domain": FIXTURE_DOMAIN,
        "status": DEFAULT_STATUS,
        "avaliable_currencies": DEFAULT_CURRENCIES,
        "avaliable_lenguages": DEFAULT_LANGUAGES,
        "pms_type": DEFAULT_PMS_TYPE,
    })
}
