//! Business logic services for the application layer.

pub mod resolution_service;
pub mod shortening_service;

pub use resolution_service::ResolutionService;
pub use shortening_service::{ShortenOutcome, ShorteningService};
