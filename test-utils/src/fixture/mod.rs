//! Test fixtures providing default values and ready-made records.
//!
//! Fixtures are plain values with no server involved. Factories use the constants here
//! as defaults.

pub mod hotel;
