//! Factory methods for creating upstream-shaped test records.
//!
//! Records are plain `serde_json::Value`s in the shape Directus returns, ready to be
//! seeded into a `TestBuilder`. Each factory hands out unique ids by default.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let hotel = factory::hotel::HotelFactory::new()
//!     .domain("seaside.test")
//!     .currencies(&["EUR"])
//!     .build();
//! let shuttle = factory::create_entry(hotel["id"].as_i64().unwrap(), "Airport shuttle");
//! ```

pub mod directory_entry;
pub mod helpers;
pub mod hotel;

pub use directory_entry::create_entry;
pub use hotel::create_hotel;
