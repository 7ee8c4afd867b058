//! Directory entry domain models and parameters.

use serde_json::Value;

use crate::model::directory::{DirectoryCollection, DirectoryEntryDto};

/// Upstream fields tried, in order, for an entry's display title.
const TITLE_FIELDS: [&str; 3] = ["name", "title", "label"];

/// Tenant-scoped content record.
///
/// The upstream record is kept verbatim; only the foreign key and display fields are
/// lifted out.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    pub id: String,
    pub hotel_id: i64,
    pub collection: DirectoryCollection,
    pub title: String,
    pub description: Option<String>,
    pub record: Value,
}

impl DirectoryEntry {
    /// Converts an upstream record at the data-source boundary.
    ///
    /// # Returns
    /// - `Some(DirectoryEntry)` - Record carries an integer `hotel_id`
    /// - `None` - Record has no usable `hotel_id` and cannot be attributed to a tenant
    pub fn from_record(collection: DirectoryCollection, record: Value) -> Option<Self> {
        let hotel_id = match record.get("hotel_id")? {
            Value::Number(n) => n.as_i64()?,
            Value::String(s) => s.parse().ok()?,
            // Relational fields may come back expanded
            Value::Object(o) => o.get("id")?.as_i64()?,
            _ => return None,
        };

        let id = match record.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let title = TITLE_FIELDS
            .iter()
            .find_map(|field| record.get(*field).and_then(Value::as_str))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("{} {}", collection.label(), id).trim().to_string());

        let description = record
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|d| !d.trim().is_empty());

        Some(Self {
            id,
            hotel_id,
            collection,
            title,
            description,
            record,
        })
    }

    pub fn into_dto(self) -> DirectoryEntryDto {
        DirectoryEntryDto {
            id: self.id,
            hotel_id: self.hotel_id,
            collection: self.collection,
            title: self.title,
            description: self.description,
            record: self.record,
        }
    }
}

/// Parameters for fetching a hotel's entries in one collection.
#[derive(Debug, Clone, Copy)]
pub struct GetDirectoryParam {
    pub hotel_id: i64,
    pub collection: DirectoryCollection,
}
