//! Local filesystem walker
//!
//! This module implements a single-threaded, depth-first walk of one root
//! directory. Each entry below the root is classified and offered to a
//! visitor closure, which decides whether it matched.
//!
//! # Architecture
//!
//! ```text
//!                     ┌─────────────────────────┐
//!                     │       TreeWalker        │
//!                     │  - walkdir, name order  │
//!                     │  - no link following    │
//!                     └───────────┬─────────────┘
//!                                 │ Visit { name, path, kind }
//!                                 ▼
//!                     ┌─────────────────────────┐
//!                     │   visitor (Matcher)     │
//!                     │  - returns "matched"    │
//!                     └─────────────────────────┘
//! ```

pub mod tree;
pub mod types;

pub use tree::{ErrorPolicy, TreeWalker, WalkProgress, WalkStats};
pub use types::{Descriptor, EntryKind, Visit};
