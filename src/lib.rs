//! file-lookup - Find files and directories by name or suffix
//!
//! Walks a single root directory (by default `/home`, or `C:\` on Windows)
//! and reports every entry whose name or extension matches a query.
//!
//! # Features
//!
//! - **Exact or substring queries**: a query ending in `*` matches any name
//!   containing the rest of the query; anything else must match exactly.
//!
//! - **Names and suffixes**: name lookups match files and directories;
//!   suffix lookups match the extension of regular files only.
//!
//! - **Collections**: several queries are answered in order, one
//!   independent traversal each.
//!
//! - **Tagged results**: a lookup either found a mapping of name to
//!   descriptor (`<absolute path> :File` / `:Directory`) or found nothing.
//!
//! # Example
//!
//! ```no_run
//! use file_lookup::Search;
//!
//! let results = Search::new("/home")
//!     .file_suffixes([".mp3", ".mp4"])
//!     .suffixes_lookup()?;
//!
//! for result in &results {
//!     println!("{}", serde_json::to_string(result)?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod progress;
pub mod query;
pub mod search;
pub mod walker;

pub use config::{default_root, CliArgs, Execution, LookupConfig, OutputFormat, Request};
pub use error::{ConfigError, LookupError, Result};
pub use query::{Matcher, Pattern, Target, WILDCARD_MARKER};
pub use search::{LookupResult, Search, NOT_FOUND_MESSAGE};
pub use walker::{Descriptor, EntryKind, ErrorPolicy, TreeWalker, WalkStats};
