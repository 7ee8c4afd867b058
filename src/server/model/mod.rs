//! Domain models and operation parameters.
//!
//! Domain models are what services return; controllers convert them to DTOs with
//! `into_dto()` at the API boundary.

pub mod directory;
pub mod health;
pub mod hotel;
