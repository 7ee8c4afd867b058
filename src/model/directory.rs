use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Tenant-scoped content collections surfaced as guest directory sections.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum DirectoryCollection {
    Transportation,
    LocalPlaces,
    Dining,
    Services,
}

impl DirectoryCollection {
    pub const ALL: [DirectoryCollection; 4] = [
        DirectoryCollection::Dining,
        DirectoryCollection::Services,
        DirectoryCollection::Transportation,
        DirectoryCollection::LocalPlaces,
    ];

    /// Name of the backing collection in the content-management system.
    pub fn collection_name(self) -> &'static str {
        match self {
            Self::Transportation => "transportation",
            Self::LocalPlaces => "local_places",
            Self::Dining => "dining",
            Self::Services => "services",
        }
    }

    /// Heading shown for the section in navigation and breadcrumbs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Transportation => "Transportation",
            Self::LocalPlaces => "Attractions",
            Self::Dining => "Dining",
            Self::Services => "Services",
        }
    }
}

impl fmt::Display for DirectoryCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownCollection(pub String);

impl fmt::Display for UnknownCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown directory collection '{}'", self.0)
    }
}

impl FromStr for DirectoryCollection {
    type Err = UnknownCollection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.collection_name() == value)
            .ok_or_else(|| UnknownCollection(value.to_string()))
    }
}

/// A directory entry as exposed by the directory API.
///
/// Entries are opaque upstream records; only the fields the pages render are lifted
/// out, the full record is passed through in `record`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DirectoryEntryDto {
    pub id: String,
    pub hotel_id: i64,
    pub collection: DirectoryCollection,
    pub title: String,
    /// Markdown description, if the record has one.
    pub description: Option<String>,
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub record: serde_json::Value,
}
