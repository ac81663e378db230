//! tasktriage Core
//!
//! Core types and error handling shared across tasktriage components.
//!
//! This crate provides:
//! - The error type raised while loading rule tables and classifying text
//! - Value types for the attributes derived from a request (complexity, priority)

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Complexity, Priority};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Complexity, Priority};
}
