//! HTTP request handlers.
//!
//! Controllers convert request input into service params, call the service layer and
//! convert domain models back into DTOs. They never talk to a content source directly.

pub mod health;
pub mod hotel;
