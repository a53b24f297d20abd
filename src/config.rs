//! Configuration types for file-lookup
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation
//! - The default root directory for the running platform

use crate::error::{self, ConfigError};
use crate::progress::{render_result, render_results};
use crate::search::{LookupResult, Search};
use crate::walker::{ErrorPolicy, WalkProgress, WalkStats};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// Root walked when none is given
pub fn default_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:\\")
    } else {
        PathBuf::from("/home")
    }
}

/// Find files and directories by name or suffix
#[derive(Parser, Debug, Clone)]
#[command(
    name = "file-lookup",
    version,
    about = "Find files and directories by name or suffix",
    long_about = "Walks a root directory (default /home, or C:\\ on Windows) and reports every\n\
                  entry whose name or extension matches the query.\n\n\
                  A query ending in '*' matches any name (or extension) containing the rest\n\
                  of the query; a '*' anywhere else is matched literally.",
    after_help = "EXAMPLES:\n    \
        file-lookup name notes.txt\n    \
        file-lookup name 'report*' --root ~/work\n    \
        file-lookup suffix .mp3 .mp4 --format json\n    \
        file-lookup kind projects --root /home/alice"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Directory to search (defaults to /home, or C:\ on Windows)
    #[arg(short = 'r', long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Output format for results
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Skip unreadable directories instead of failing the lookup
    #[arg(long, global = true)]
    pub skip_errors: bool,

    /// Quiet mode - suppress progress and summary
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Verbose output (debug logging)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// Subcommands
#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Find files and directories by name
    Name {
        /// One or more names; a trailing '*' matches substrings
        #[arg(value_name = "NAME", required = true, num_args = 1..)]
        names: Vec<String>,
    },

    /// Find files by extension (e.g. .mp3)
    Suffix {
        /// One or more suffixes, dot included; a trailing '*' matches substrings
        #[arg(value_name = "SUFFIX", required = true, num_args = 1..)]
        suffixes: Vec<String>,
    },

    /// Report whether a path under the root is a file or a directory
    Kind {
        /// Path relative to the root, or absolute
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Output format for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per match
    Text,
    /// Pretty-printed JSON
    Json,
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Names(Vec<String>),
    Suffixes(Vec<String>),
    Kind(String),
}

impl Request {
    /// Short description for the header
    pub fn describe(&self) -> String {
        match self {
            Request::Names(names) => format!("name {}", names.join(", ")),
            Request::Suffixes(suffixes) => format!("suffix {}", suffixes.join(", ")),
            Request::Kind(name) => format!("kind of {}", name),
        }
    }
}

/// Outcome of running a configured request
#[derive(Debug, Clone, Default)]
pub struct Execution {
    /// Rendered output for stdout, newline terminated
    pub output: String,

    /// Totals over every walk (empty for `kind`)
    pub stats: WalkStats,

    /// Matches across all results
    pub found: usize,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Absolute root directory
    pub root: PathBuf,

    pub request: Request,

    pub output_format: OutputFormat,

    pub error_policy: ErrorPolicy,

    /// Show spinner, header and summary
    pub show_progress: bool,

    pub verbose: bool,
}

impl LookupConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let root = args.root.unwrap_or_else(default_root);
        let root = std::path::absolute(&root).map_err(|e| ConfigError::InvalidRoot {
            path: root.clone(),
            reason: e.to_string(),
        })?;

        if !root.exists() {
            return Err(ConfigError::RootMissing { path: root });
        }
        if !root.is_dir() {
            return Err(ConfigError::RootNotDirectory { path: root });
        }

        let request = match args.command {
            Command::Name { names } => {
                reject_empty(&names, "filename")?;
                Request::Names(names)
            }
            Command::Suffix { suffixes } => {
                reject_empty(&suffixes, "suffix")?;
                Request::Suffixes(suffixes)
            }
            Command::Kind { name } => {
                reject_empty(std::slice::from_ref(&name), "filename")?;
                Request::Kind(name)
            }
        };

        let error_policy = if args.skip_errors {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::Abort
        };

        Ok(Self {
            root,
            request,
            output_format: args.format,
            error_policy,
            show_progress: !args.quiet,
            verbose: args.verbose,
        })
    }

    /// Build the lookup request for this configuration
    pub fn search(&self) -> Search {
        let search = Search::new(&self.root).error_policy(self.error_policy);
        match &self.request {
            Request::Names(names) if names.len() == 1 => search.filename(names[0].clone()),
            Request::Names(names) => search.filenames(names.iter().cloned()),
            Request::Suffixes(suffixes) if suffixes.len() == 1 => {
                search.file_suffix(suffixes[0].clone())
            }
            Request::Suffixes(suffixes) => search.file_suffixes(suffixes.iter().cloned()),
            Request::Kind(name) => search.filename(name.clone()),
        }
    }

    /// Run the request and render its output
    ///
    /// One query gives a single result, several give a collection. A lookup
    /// that finds nothing still succeeds with the not-found message.
    pub fn execute<P>(&self, progress: P) -> error::Result<Execution>
    where
        P: FnMut(&WalkProgress),
    {
        let search = self.search();

        let queries = match &self.request {
            Request::Kind(name) => {
                let kind = if search.is_a_directory()? {
                    "directory"
                } else if search.is_a_file()? {
                    "file"
                } else {
                    "missing"
                };
                info!("{} is {}", name, kind);
                return Ok(Execution {
                    output: format!("{}\n", kind),
                    ..Default::default()
                });
            }
            Request::Names(queries) | Request::Suffixes(queries) => queries,
        };

        let suffixes = matches!(self.request, Request::Suffixes(_));
        let (results, stats): (Vec<LookupResult>, WalkStats) = if queries.len() == 1 {
            let (result, stats) = if suffixes {
                search.suffix_lookup_with_stats(progress)?
            } else {
                search.filename_lookup_with_stats(progress)?
            };
            (vec![result], stats)
        } else if suffixes {
            search.suffixes_lookup_with_stats(progress)?
        } else {
            search.filenames_lookup_with_stats(progress)?
        };

        let mut output = match results.as_slice() {
            [single] => render_result(single, self.output_format)?,
            many => render_results(queries, many, self.output_format)?,
        };
        if !output.ends_with('\n') {
            output.push('\n');
        }

        Ok(Execution {
            output,
            found: results.iter().map(LookupResult::len).sum(),
            stats,
        })
    }
}

fn reject_empty(items: &[String], what: &'static str) -> Result<(), ConfigError> {
    if items.iter().any(|s| s.is_empty()) {
        return Err(ConfigError::EmptyQuery { what });
    }
    Ok(())
}
