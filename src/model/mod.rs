//! DTOs shared between the server API and the browser bundle.

pub mod api;
pub mod directory;
pub mod health;
pub mod hotel;
