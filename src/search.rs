//! Lookup requests and results
//!
//! A [`Search`] holds the root to walk and the optional query fields. Each
//! lookup operation checks that the field it needs is set, then performs
//! one traversal per query item. Results are tagged: a lookup either
//! [`Found`](LookupResult::Found) a non-empty mapping of entry name to
//! descriptor, or found nothing.
//!
//! Entries are keyed by name. When two matched entries share a name the
//! one visited later replaces the earlier one, so each key holds the last
//! match in depth-first, name-ordered traversal.

use crate::config::default_root;
use crate::error::{LookupError, Result};
use crate::query::{Matcher, Target};
use crate::walker::{Descriptor, ErrorPolicy, TreeWalker, WalkProgress, WalkStats};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Placeholder text reported when a lookup matched nothing
pub const NOT_FOUND_MESSAGE: &str = "Couldn't find a file you mentioned.";

/// Outcome of a single filename or suffix lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// Matched entry name to descriptor; never empty
    Found(BTreeMap<String, Descriptor>),
    /// Nothing under the root matched
    NotFound,
}

impl LookupResult {
    fn from_matches(matches: BTreeMap<String, Descriptor>) -> Self {
        if matches.is_empty() {
            LookupResult::NotFound
        } else {
            LookupResult::Found(matches)
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    pub fn matches(&self) -> Option<&BTreeMap<String, Descriptor>> {
        match self {
            LookupResult::Found(m) => Some(m),
            LookupResult::NotFound => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.matches().and_then(|m| m.get(name))
    }

    /// Number of distinct matched names
    pub fn len(&self) -> usize {
        self.matches().map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        !self.is_found()
    }
}

impl Serialize for LookupResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            LookupResult::Found(matches) => matches.serialize(serializer),
            LookupResult::NotFound => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("message", NOT_FOUND_MESSAGE)?;
                map.end()
            }
        }
    }
}

/// A lookup request against one root directory
#[derive(Debug, Clone)]
pub struct Search {
    root: PathBuf,
    policy: ErrorPolicy,
    filename: Option<String>,
    file_suffix: Option<String>,
    filenames: Option<Vec<String>>,
    file_suffixes: Option<Vec<String>>,
}

impl Default for Search {
    fn default() -> Self {
        Self::new(default_root())
    }
}

impl Search {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            policy: ErrorPolicy::default(),
            filename: None,
            file_suffix: None,
            filenames: None,
            file_suffixes: None,
        }
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = Some(suffix.into());
        self
    }

    pub fn filenames<I, S>(mut self, filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filenames = Some(filenames.into_iter().map(Into::into).collect());
        self
    }

    pub fn file_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_suffixes = Some(suffixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find entries (files or directories) by name
    pub fn filename_lookup(&self) -> Result<LookupResult> {
        self.filename_lookup_with_stats(|_| {}).map(|(result, _)| result)
    }

    pub fn filename_lookup_with_stats<P>(&self, progress: P) -> Result<(LookupResult, WalkStats)>
    where
        P: FnMut(&WalkProgress),
    {
        let filename = required(&self.filename, "filename")?;
        self.run(&Matcher::new(Target::Name, filename), progress)
    }

    /// Find regular files by extension
    pub fn suffix_lookup(&self) -> Result<LookupResult> {
        self.suffix_lookup_with_stats(|_| {}).map(|(result, _)| result)
    }

    pub fn suffix_lookup_with_stats<P>(&self, progress: P) -> Result<(LookupResult, WalkStats)>
    where
        P: FnMut(&WalkProgress),
    {
        let suffix = required(&self.file_suffix, "file_suffix")?;
        self.run(&Matcher::new(Target::Suffix, suffix), progress)
    }

    /// One filename lookup per item, in order
    pub fn filenames_lookup(&self) -> Result<Vec<LookupResult>> {
        self.filenames_lookup_with_stats(|_| {}).map(|(results, _)| results)
    }

    pub fn filenames_lookup_with_stats<P>(&self, progress: P) -> Result<(Vec<LookupResult>, WalkStats)>
    where
        P: FnMut(&WalkProgress),
    {
        let filenames = required(&self.filenames, "filenames")?;
        self.run_each(Target::Name, filenames, progress)
    }

    /// One suffix lookup per item, in order
    pub fn suffixes_lookup(&self) -> Result<Vec<LookupResult>> {
        self.suffixes_lookup_with_stats(|_| {}).map(|(results, _)| results)
    }

    pub fn suffixes_lookup_with_stats<P>(&self, progress: P) -> Result<(Vec<LookupResult>, WalkStats)>
    where
        P: FnMut(&WalkProgress),
    {
        let suffixes = required(&self.file_suffixes, "file_suffixes")?;
        self.run_each(Target::Suffix, suffixes, progress)
    }

    /// Whether `filename` names an existing regular file
    ///
    /// Relative names are resolved against the root.
    pub fn is_a_file(&self) -> Result<bool> {
        let path = self.resolve(required(&self.filename, "filename")?);
        Ok(std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false))
    }

    /// Whether `filename` names an existing directory
    pub fn is_a_directory(&self) -> Result<bool> {
        let path = self.resolve(required(&self.filename, "filename")?);
        Ok(std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false))
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn run_each<P>(&self, target: Target, items: &[String], mut progress: P) -> Result<(Vec<LookupResult>, WalkStats)>
    where
        P: FnMut(&WalkProgress),
    {
        let mut results = Vec::with_capacity(items.len());
        let mut total = WalkStats::default();

        for item in items {
            let matcher = Matcher::new(target, item);
            let (result, stats) = self.run(&matcher, |p: &WalkProgress| progress(&p.after(&total)))?;
            total.absorb(&stats);
            results.push(result);
        }

        Ok((results, total))
    }

    fn run<P>(&self, matcher: &Matcher, progress: P) -> Result<(LookupResult, WalkStats)>
    where
        P: FnMut(&WalkProgress),
    {
        let walker = TreeWalker::new(&self.root, self.policy);
        let mut found: BTreeMap<String, Descriptor> = BTreeMap::new();

        let stats = walker.walk_with_progress(
            |visit| {
                if !matcher.is_match(visit.name, visit.kind.is_file()) {
                    return false;
                }
                if let Some(previous) = found.insert(visit.name.to_string(), visit.descriptor()) {
                    debug!("{} replaces earlier match {}", visit.path.display(), previous);
                }
                true
            },
            progress,
        )?;

        debug!(
            "{} lookup '{}' under {}: {} match(es)",
            matcher.target.label(),
            matcher.pattern,
            self.root.display(),
            found.len()
        );

        Ok((LookupResult::from_matches(found), stats))
    }
}

fn required<'a, T>(value: &'a Option<T>, field: &'static str) -> Result<&'a T> {
    value.as_ref().ok_or(LookupError::InvalidArgument { field })
}
