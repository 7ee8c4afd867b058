//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the content sources. They are
//! responsible for:
//!
//! - **Tenant Resolution**: Mapping hosts and ids to hotels
//! - **Tenant Isolation**: Guaranteeing entries returned for a hotel belong to it
//! - **Domain Models**: Working with domain models rather than DTOs or raw records
//! - **Diagnostics**: Health reporting and content verification

pub mod directory;
pub mod health;
pub mod hotel;
pub mod verify;
