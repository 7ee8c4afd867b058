//! Server-side API backend and content resolution.
//!
//! This module contains the backend half of the guest directory: the JSON API consumed by
//! the pages, the health endpoint, and the integration with the headless content-management
//! system (Directus) that holds every hotel's directory content. The backend uses Axum as the
//! web framework and reqwest for outbound content requests.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Tenant lookup, directory and health logic
//! - **Data Layer** (`data/`) - `ContentSource` implementations (Directus, fixture, snapshot)
//! - **Content Client** (`content/`) - Directus REST client and query builder
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request extractors such as tenant host resolution
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration, assembled once at startup
//! - **State** (`state`) - Shared application state (configuration, content source)
//! - **Startup** (`startup`) - HTTP client, content source and CORS setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Middleware** resolves the tenant host when the handler needs it
//! 3. **Controller** converts query/path input to params and calls a service
//! 4. **Service** queries the content source filtered by tenant id
//! 5. **Controller** converts the domain model to a DTO and returns the JSON response
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod content;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
