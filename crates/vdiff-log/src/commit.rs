//! Commit and file-change records

use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-letter change status from a raw diff line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", from = "char")]
pub enum ChangeType {
    /// `A`
    Added,
    /// `C`
    Copied,
    /// `D`
    Deleted,
    /// `M`
    Modified,
    /// `R`
    Renamed,
    /// `T`
    TypeChanged,
    /// `U`
    Unmerged,
    /// `X`
    Unknown,
    /// Any other letter, kept verbatim
    Other(char),
}

impl ChangeType {
    /// The letter git uses for this status
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Added => 'A',
            Self::Copied => 'C',
            Self::Deleted => 'D',
            Self::Modified => 'M',
            Self::Renamed => 'R',
            Self::TypeChanged => 'T',
            Self::Unmerged => 'U',
            Self::Unknown => 'X',
            Self::Other(c) => c,
        }
    }
}

impl From<char> for ChangeType {
    fn from(c: char) -> Self {
        match c {
            'A' => Self::Added,
            'C' => Self::Copied,
            'D' => Self::Deleted,
            'M' => Self::Modified,
            'R' => Self::Renamed,
            'T' => Self::TypeChanged,
            'U' => Self::Unmerged,
            'X' => Self::Unknown,
            other => Self::Other(other),
        }
    }
}

impl From<ChangeType> for char {
    fn from(change: ChangeType) -> Self {
        change.letter()
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// How one file changed within a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Octal mode before the change (`000000` for additions)
    pub previous_mode: String,
    /// Octal mode after the change (`000000` for deletions)
    pub current_mode: String,
    /// Blob hash before the change, without the trailing ellipsis
    pub previous_sha: String,
    /// Blob hash after the change, without the trailing ellipsis
    pub current_sha: String,
    /// Change status
    pub change_type: ChangeType,
}

/// A file change together with the path it applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Path relative to the repository root
    pub path: String,
    /// What happened to it
    #[serde(flatten)]
    pub change: FileChange,
}

/// Represents a commit as reported by `git log --raw`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit hash
    pub sha: String,
    /// Author line without the `Author: ` prefix
    pub author: String,
    /// Date line without the `Date:` prefix, verbatim
    pub date: String,
    /// Parent abbreviations from the `Merge:` line, for merge commits only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge: Option<String>,
    /// Changed files in the order git reported them
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

impl Commit {
    /// Create a commit with the given hash and no other data
    #[must_use]
    pub fn new(sha: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            author: String::new(),
            date: String::new(),
            merge: None,
            files: Vec::new(),
        }
    }

    /// Get the short SHA (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> &str {
        match self.sha.char_indices().nth(7) {
            Some((idx, _)) => &self.sha[..idx],
            None => &self.sha,
        }
    }

    /// Check if this is a merge commit
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.merge.is_some()
    }

    /// Look up the change recorded for `path`
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&FileChange> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| &f.change)
    }

    /// Record a change for `path`.
    ///
    /// Paths are unique within a commit: a second change for the same path
    /// replaces the first one in place, so the file keeps its original position.
    pub fn insert_file(&mut self, path: impl Into<String>, change: FileChange) {
        let path = path.into();
        match self.files.iter_mut().find(|f| f.path == path) {
            Some(existing) => existing.change = change,
            None => self.files.push(ChangedFile { path, change }),
        }
    }
}

/// Parsed history, newest commit first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    commits: Vec<Commit>,
}

impl History {
    /// Wrap an already ordered list of commits (newest first)
    #[must_use]
    pub fn new(commits: Vec<Commit>) -> Self {
        Self { commits }
    }

    /// Number of commits
    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Whether there are no commits
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Commits in log order, newest first
    #[must_use]
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Commits in chronological order, oldest first
    pub fn iter_oldest_first(&self) -> impl DoubleEndedIterator<Item = &Commit> {
        self.commits.iter().rev()
    }

    /// Find a commit by full hash
    #[must_use]
    pub fn get(&self, sha: &str) -> Option<&Commit> {
        self.commits.iter().find(|c| c.sha == sha)
    }

    /// The hash of the commit listed right after `sha`, i.e. the one before it in history.
    ///
    /// Returns `None` when `sha` is unknown or is the oldest commit.
    #[must_use]
    pub fn previous_commit(&self, sha: &str) -> Option<&str> {
        let idx = self.commits.iter().position(|c| c.sha == sha)?;
        self.commits.get(idx + 1).map(|c| c.sha.as_str())
    }
}
