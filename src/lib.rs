//! Refoliate - rename delivered page directories after their scan masters
//!
//! A digitization delivery arrives as two parallel trees: the delivery tree
//! holds one derivative master image per page, and the target tree holds one
//! page-level directory per page, named by sequence number. Refoliate pairs
//! the two listings positionally - both sorted by the same cleaned-name
//! comparator - and renames each numeric directory to the basename of its
//! master image.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the
//!   align command)
//! - [`core`] - Scanning, pairing, pre-flight checks, and the rename executor
//! - [`ui`] - Output configuration and display
//!
//! # Correctness Invariants
//!
//! Refoliate maintains the following invariants:
//!
//! 1. Both trees are listed with the same comparator, so positional pairing
//!    is deterministic for fixed directory contents
//! 2. No rename is attempted before every pre-flight check has passed
//! 3. A failed rename aborts the remaining batch; completed renames stay
//!    applied and a re-run skips them

pub mod cli;
pub mod core;
pub mod ui;
