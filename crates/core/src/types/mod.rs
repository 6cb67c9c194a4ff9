//! Core types for AI Tools Hub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod pricing;
pub mod slug;

pub use email::{Email, EmailError};
pub use pricing::Pricing;
pub use slug::*;
