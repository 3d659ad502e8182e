//! Utility functions shared across layers.
//!
//! - [`short_code`] - Base62 encoding of row ids into short codes
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod short_code;
