//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. Everything inside is immutable or internally
//! synchronised, so clones are cheap and handlers never coordinate with each other.

use std::{
    sync::Arc,
    time::{Instant, SystemTime},
};

use crate::server::{config::Config, data::ContentSource};

/// Source of wall-clock time for timestamps in responses.
pub type Clock = fn() -> SystemTime;

#[derive(Clone)]
pub struct AppState {
    /// Configuration assembled once at startup.
    pub config: Arc<Config>,

    /// Content source selected by configuration (Directus, fixture, or a snapshot of one).
    pub content: Arc<dyn ContentSource>,

    /// Process start, for uptime reporting.
    pub started_at: Instant,

    /// Wall clock used by the health endpoint.
    pub clock: Clock,
}

impl AppState {
    /// Creates the application state with the system clock.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `content` - Content source backing the API
    pub fn new(config: Config, content: Arc<dyn ContentSource>) -> Self {
        Self {
            config: Arc::new(config),
            content,
            started_at: Instant::now(),
            clock: SystemTime::now,
        }
    }

    /// Replaces the wall clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}
