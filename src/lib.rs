//! Multitenant hotel guest directory.
//!
//! The `client` module holds the Dioxus pages and components rendered on the server and
//! hydrated in the browser, `model` holds the DTOs shared by both sides of the API, and
//! `server` holds the axum API, content-management integration and startup wiring.

pub mod client;
pub mod model;

#[cfg(feature = "server")]
pub mod server;
