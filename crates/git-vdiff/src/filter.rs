// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Deciding which commits get reviewed

use vdiff_log::Commit;

/// Author substring filter with an allowlist of hashes that bypass it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorFilter {
    user: Option<String>,
    always_include: Vec<String>,
}

impl AuthorFilter {
    /// Create a filter.
    ///
    /// `always_include` is a whitespace-separated list of hashes, as found in
    /// the `ALWAYS_INCLUDE` environment variable.
    #[must_use]
    pub fn new(user: Option<String>, always_include: Option<&str>) -> Self {
        Self {
            user,
            always_include: always_include
                .map(|list| list.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }

    /// A filter that lets every commit through
    #[must_use]
    pub fn everyone() -> Self {
        Self::default()
    }

    /// The author substring being matched, if any
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Hashes that are always included
    #[must_use]
    pub fn always_include(&self) -> &[String] {
        &self.always_include
    }

    /// Whether `sha` is on the allowlist. Entries may be abbreviated.
    #[must_use]
    pub fn is_always_included(&self, sha: &str) -> bool {
        self.always_include
            .iter()
            .any(|entry| sha.starts_with(entry.as_str()))
    }

    /// Whether `commit` should be reviewed
    #[must_use]
    pub fn includes(&self, commit: &Commit) -> bool {
        match &self.user {
            None => true,
            Some(user) => commit.author.contains(user.as_str()) || self.is_always_included(&commit.sha),
        }
    }
}
