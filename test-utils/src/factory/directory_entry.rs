//! Directory entry record factory.

use serde_json::{json, Map, Value};

use crate::factory::helpers::next_id;

/// Factory for directory entry records (transportation, local places, ...).
///
/// Entries are opaque upstream; the factory only sets the fields the directory reads
/// plus any extra fields added with `field`.
pub struct DirectoryEntryFactory {
    id: u64,
    hotel_id: i64,
    name: String,
    description: Option<String>,
    extra: Map<String, Value>,
}

impl DirectoryEntryFactory {
    pub fn new(hotel_id: i64) -> Self {
        let id = next_id();

        Self {
            id,
            hotel_id,
            name: format!("Entry {}", id),
            description: None,
            extra: Map::new(),
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Sets an additional upstream field.
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Value {
        let mut record = self.extra;
        record.insert("id".to_string(), json!(self.id));
        record.insert("hotel_id".to_string(), json!(self.hotel_id));
        record.insert("name".to_string(), json!(self.name));
        if let Some(description) = self.description {
            record.insert("description".to_string(), json!(description));
        }

        Value::Object(record)
    }
}

/// Creates a directory entry for `hotel_id` with the given display name.
pub fn create_entry(hotel_id: i64, name: &str) -> Value {
    DirectoryEntryFactory::new(hotel_id).name(name).build()
}
