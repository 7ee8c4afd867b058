//! In-process mocks of external services.

pub mod directus;
