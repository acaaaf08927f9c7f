//! core
//!
//! Core domain types and operations for Refoliate.
//!
//! # Modules
//!
//! - [`types`] - Strong types: WorkId
//! - [`entry`] - Entry classification and filter predicates
//! - [`scan`] - Directory scanning with deterministic ordering
//! - [`plan`] - Destination synthesis and the rename plan
//! - [`preflight`] - Pre-flight gate run before any mutation
//! - [`perms`] - Permission queries and long-listing rendering
//! - [`exec`] - Rename executor
//!
//! # Design Principles
//!
//! - Predicates are pure functions over (name, kind), testable without a
//!   filesystem
//! - Every listing is ordered by one comparator
//! - All checks run before the first rename

pub mod entry;
pub mod exec;
pub mod perms;
pub mod plan;
pub mod preflight;
pub mod scan;
pub mod types;
