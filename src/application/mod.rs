//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortening_service::ShorteningService`] - Deduplicated short code creation and alias attachment
//! - [`services::resolution_service::ResolutionService`] - Short code lookup

pub mod services;
