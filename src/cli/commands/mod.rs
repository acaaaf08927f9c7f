//! cli::commands
//!
//! Command handlers.
//!
//! # Architecture
//!
//! Refoliate has a single command. Argument validation happens at parse time
//! and tree validation in the pre-flight gate, so the handler only wires the
//! core stages together and prints the closing summary.

mod align;

pub use align::align;
