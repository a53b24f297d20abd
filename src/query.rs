//! Query patterns and name/extension predicates
//!
//! A raw query string is either an exact pattern or, when its last
//! character is [`WILDCARD_MARKER`], a substring pattern over the rest of
//! the string. A marker anywhere else is an ordinary character.

use std::fmt;

/// Trailing character that turns a query into a substring match
pub const WILDCARD_MARKER: char = '*';

/// Parsed query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Candidate must equal the text
    Exact(String),
    /// Candidate must contain the text
    Contains(String),
}

impl Pattern {
    /// Parse a raw query, honouring the marker only in last position
    pub fn parse(raw: &str) -> Self {
        match raw.strip_suffix(WILDCARD_MARKER) {
            Some(stem) => Pattern::Contains(stem.to_string()),
            None => Pattern::Exact(raw.to_string()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Pattern::Contains(_))
    }

    /// The text compared against candidates (marker stripped)
    pub fn text(&self) -> &str {
        match self {
            Pattern::Exact(s) | Pattern::Contains(s) => s,
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Pattern::Exact(s) => candidate == s,
            Pattern::Contains(s) => candidate.contains(s.as_str()),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Exact(s) => write!(f, "{}", s),
            Pattern::Contains(s) => write!(f, "{}{}", s, WILDCARD_MARKER),
        }
    }
}

/// Which part of an entry a pattern is tested against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Full entry name; files and directories
    Name,
    /// Extension of the name; non-directory entries only
    Suffix,
}

impl Target {
    pub fn label(&self) -> &'static str {
        match self {
            Target::Name => "filename",
            Target::Suffix => "suffix",
        }
    }
}

/// A single lookup predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    pub target: Target,
    pub pattern: Pattern,
}

impl Matcher {
    pub fn new(target: Target, raw: &str) -> Self {
        Self {
            target,
            pattern: Pattern::parse(raw),
        }
    }

    pub fn name(raw: &str) -> Self {
        Self::new(Target::Name, raw)
    }

    pub fn suffix(raw: &str) -> Self {
        Self::new(Target::Suffix, raw)
    }

    /// Test an entry by name; `is_file` gates suffix matching
    pub fn is_match(&self, name: &str, is_file: bool) -> bool {
        match self.target {
            Target::Name => self.pattern.matches(name),
            Target::Suffix => is_file && self.pattern.matches(extension_of(name)),
        }
    }
}

/// Extension of a file name, dot included
///
/// The last `.` after any leading dots starts the extension, so
/// `archive.tar.gz` gives `.gz`, `.bashrc` gives an empty string and
/// `file.` gives `.`.
pub fn extension_of(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(idx) => &name[stem_start + idx..],
        None => "",
    }
}
