//! AI Tools Hub Core - Shared types library.
//!
//! This crate provides common types used across all AI Tools Hub components:
//! - `site` - The public directory website
//! - `integration-tests` - Black-box HTTP tests against the site
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no framework
//! dependencies. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe slugs, pricing tiers, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
