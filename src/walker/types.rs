//! Entry types produced by the walker
//!
//! Every visited entry is classified as a file or a directory and, when it
//! matches a lookup, described by its absolute path plus that kind.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::DirEntry;

/// Type of filesystem entry as reported by lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Anything that is not a directory (regular files, other links, devices)
    File,
    /// Directory, or a symlink resolving to one
    Directory,
}

impl EntryKind {
    /// Classify a walked entry
    ///
    /// Symlinks are resolved once so a link to a directory counts as a
    /// directory; a broken link counts as a file. Links are never descended.
    pub fn of(entry: &DirEntry) -> Self {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            return EntryKind::Directory;
        }
        if file_type.is_symlink() {
            return Self::of_path(entry.path()).unwrap_or(EntryKind::File);
        }
        EntryKind::File
    }

    /// Classify a path, following symlinks; `None` if it does not exist
    pub fn of_path(path: &Path) -> Option<Self> {
        let meta = std::fs::metadata(path).ok()?;
        if meta.is_dir() {
            Some(EntryKind::Directory)
        } else {
            Some(EntryKind::File)
        }
    }

    pub fn is_file(&self) -> bool {
        *self == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        *self == EntryKind::Directory
    }

    /// Label used in descriptors
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Directory",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Absolute path and kind of a matched entry
///
/// Renders as `<absolute path> :File` or `<absolute path> :Directory`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Descriptor {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :{}", self.path.display(), self.kind)
    }
}

impl Serialize for Descriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An entry handed to the visitor during a walk
#[derive(Debug)]
pub struct Visit<'a> {
    /// Entry name (lossy for non UTF-8 names)
    pub name: &'a str,
    /// Absolute path of the entry
    pub path: &'a Path,
    pub kind: EntryKind,
    /// Depth below the root (children of the root are at depth 1)
    pub depth: usize,
}

impl Visit<'_> {
    pub fn descriptor(&self) -> Descriptor {
        Descriptor::new(self.path, self.kind)
    }
}
