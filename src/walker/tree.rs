//! Depth-first walker over a single root
//!
//! Enumerates every entry strictly below the root with walkdir, classifies
//! it, and hands it to a visitor. Directories are read in name order and
//! symlinks are never followed. What happens on an unreadable directory is
//! decided by [`ErrorPolicy`].

use crate::error::{describe_walk_error, LookupError, Result};
use crate::walker::types::{EntryKind, Visit};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// How often (in entries) the progress callback fires
const PROGRESS_INTERVAL: u64 = 512;

/// What to do when part of the tree cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Fail the whole lookup on the first access error
    #[default]
    Abort,
    /// Log, count and skip the unreadable subtree
    Skip,
}

/// Result from a walk
#[derive(Debug, Clone, Default)]
pub struct WalkStats {
    pub dirs: u64,
    pub files: u64,
    pub matches: u64,
    pub errors: u64,
    pub duration: Duration,
}

impl WalkStats {
    pub fn entries(&self) -> u64 {
        self.dirs + self.files
    }

    /// Fold another walk into this one (collection lookups)
    pub fn absorb(&mut self, other: &WalkStats) {
        self.dirs += other.dirs;
        self.files += other.files;
        self.matches += other.matches;
        self.errors += other.errors;
        self.duration += other.duration;
    }
}

/// Progress information for display
#[derive(Debug, Clone, Default)]
pub struct WalkProgress {
    pub dirs: u64,
    pub files: u64,
    pub matches: u64,
    pub errors: u64,
    pub elapsed: Duration,
}

impl WalkProgress {
    pub fn entries_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.files + self.dirs) as f64 / secs
        } else {
            0.0
        }
    }

    /// Progress of a later walk shifted by the walks that ran before it
    pub fn after(&self, earlier: &WalkStats) -> WalkProgress {
        WalkProgress {
            dirs: earlier.dirs + self.dirs,
            files: earlier.files + self.files,
            matches: earlier.matches + self.matches,
            errors: earlier.errors + self.errors,
            elapsed: earlier.duration + self.elapsed,
        }
    }
}

/// Walker rooted at one directory
#[derive(Debug, Clone)]
pub struct TreeWalker {
    root: PathBuf,
    policy: ErrorPolicy,
}

impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>, policy: ErrorPolicy) -> Self {
        Self {
            root: root.into(),
            policy,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Walk the tree; the visitor returns true when it counted a match
    pub fn walk<F>(&self, visit: F) -> Result<WalkStats>
    where
        F: FnMut(&Visit<'_>) -> bool,
    {
        self.walk_with_progress(visit, |_| {})
    }

    pub fn walk_with_progress<F, P>(&self, mut visit: F, mut progress: P) -> Result<WalkStats>
    where
        F: FnMut(&Visit<'_>) -> bool,
        P: FnMut(&WalkProgress),
    {
        let start = Instant::now();
        let root = std::path::absolute(&self.root).map_err(|e| LookupError::RootUnreadable {
            path: self.root.clone(),
            reason: e.to_string(),
        })?;

        // A missing root is reported by walkdir at depth 0
        if root.exists() && !root.is_dir() {
            return Err(LookupError::RootUnreadable {
                path: root,
                reason: "not a directory".into(),
            });
        }

        debug!("Walking {} ({:?} on errors)", root.display(), self.policy);

        let mut stats = WalkStats::default();

        let iter = WalkDir::new(&root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        for next in iter {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) => {
                    if self.policy == ErrorPolicy::Abort || err.depth() == 0 {
                        return Err(LookupError::from_walk(&root, err));
                    }
                    stats.errors += 1;
                    let path = err.path().unwrap_or(root.as_path()).display().to_string();
                    warn!("Skipping {}: {}", path, describe_walk_error(&err));
                    continue;
                }
            };

            let kind = EntryKind::of(&entry);
            match kind {
                EntryKind::Directory => stats.dirs += 1,
                EntryKind::File => stats.files += 1,
            }

            let name = entry.file_name().to_string_lossy();
            let matched = visit(&Visit {
                name: &name,
                path: entry.path(),
                kind,
                depth: entry.depth(),
            });
            if matched {
                stats.matches += 1;
            }

            if stats.entries() % PROGRESS_INTERVAL == 0 {
                progress(&WalkProgress {
                    dirs: stats.dirs,
                    files: stats.files,
                    matches: stats.matches,
                    errors: stats.errors,
                    elapsed: start.elapsed(),
                });
            }
        }

        stats.duration = start.elapsed();
        debug!(
            "Walk of {} complete: {} dirs, {} files, {} matches, {} errors",
            root.display(),
            stats.dirs,
            stats.files,
            stats.matches,
            stats.errors
        );

        Ok(stats)
    }
}
