//! Hotel Directory Test Utils
//!
//! Provides shared testing utilities for the hotel directory. The centrepiece is an
//! in-process mock of the Directus items endpoint, so content-client and diagnostic tests
//! run against real HTTP without network access or a live content-management system.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder seeding collections and failure modes
//! - **TestContext**: Running mock endpoint plus the credentials to reach it
//! - **factory / fixture**: Upstream-shaped hotel and directory records
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn reads_transportation() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_hotel(factory::hotel::HotelFactory::new().id(1).build())
//!         .with_entry("transportation", factory::create_entry(1, "Airport shuttle"))
//!         .build()
//!         .await?;
//!
//!     let url = test.directus_url();
//!     // Point a DirectusClient at `url`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod mock;
