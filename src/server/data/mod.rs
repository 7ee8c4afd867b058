//! Content sources backing the directory.
//!
//! `ContentSource` is the capability every handler depends on: fetch hotels matching an
//! optional filter, and fetch one collection of directory entries for a hotel. Three
//! implementations exist:
//!
//! - `DirectusSource` - live reads from the content-management system
//! - `FixtureSource` - fixed in-memory data, for local development and tests
//! - `SnapshotSource` - wraps another source and keeps the first successful result, used
//!   in static rendering mode

pub mod directus;
pub mod fixture;
pub mod snapshot;

use async_trait::async_trait;

use crate::{
    model::directory::DirectoryCollection,
    server::{
        error::content::ContentError,
        model::{
            directory::DirectoryEntry,
            hotel::{Hotel, HotelFilter},
        },
    },
};

pub use directus::DirectusSource;
pub use fixture::FixtureSource;
pub use snapshot::SnapshotSource;

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Hotels matching `filter`, in upstream order.
    async fn hotels(&self, filter: &HotelFilter) -> Result<Vec<Hotel>, ContentError>;

    /// Entries of `collection` belonging to `hotel_id`.
    async fn directory_entries(
        &self,
        hotel_id: i64,
        collection: DirectoryCollection,
    ) -> Result<Vec<DirectoryEntry>, ContentError>;
}

#[cfg(test)]
mod test;
