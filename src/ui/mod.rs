//! ui
//!
//! User-facing output utilities.
//!
//! # Modules
//!
//! - [`output`] - Output configuration and display
//!
//! # Design
//!
//! All printing goes through this module so formatting, verbosity, and color
//! handling stay consistent across the tool.

pub mod output;
