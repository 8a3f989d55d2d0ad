//! Salesboard Core - Shared types library.
//!
//! This crate provides common types used across all Salesboard components:
//! - `dashboard` - Web dashboard serving the analytics views
//! - `cli` - Command-line tools for migrations, seeding, and reports
//!
//! # Architecture
//!
//! The core crate contains only types and pure computation - no I/O, no
//! database access, no HTTP. The reference dataset in [`dataset`] defines
//! every headline metric as an in-memory aggregation, independently of the
//! SQL catalog the dashboard runs, so the two can be checked against each
//! other.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs
//! - [`model`] - The star-schema entities
//! - [`dataset`] - In-memory reference dataset and metric definitions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod dataset;
pub mod model;
pub mod types;

pub use dataset::*;
pub use model::*;
pub use types::*;
