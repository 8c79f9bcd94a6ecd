// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Git log parsing
//!
//! Turns the text printed by `git log --raw` into a [`History`]. Parsing is
//! line-oriented: each line is classified by [`crate::line::classify`] and
//! folded into the commit currently being accumulated.
//!
//! # Example
//!
//! ```
//! use vdiff_log::parse_log;
//!
//! let output = "commit abc1234\n\
//!               Author: Jane <jane@x.com>\n\
//!               Date:   Mon Jan 5 10:00:00 2026 +0000\n\
//!               \n\
//!               \x20   Add readme\n\
//!               \n\
//!               :000000 100644 0000000 e9e6cc9 A\tREADME.md\n";
//! let history = parse_log(output).unwrap();
//! assert_eq!(history.len(), 1);
//! assert_eq!(history.commits()[0].files[0].path, "README.md");
//! ```

use tracing::{debug, trace, warn};

use crate::commit::{Commit, History};
use crate::error::LogError;
use crate::line::{LogLine, classify};

/// Fields collected for the commit currently being read
#[derive(Debug, Default)]
struct PendingCommit {
    sha: Option<String>,
    author: Option<String>,
    date: Option<String>,
    draft: Commit,
}

impl PendingCommit {
    fn started(sha: &str) -> Self {
        Self {
            sha: Some(sha.to_string()),
            ..Default::default()
        }
    }

    fn is_empty(&self) -> bool {
        self.sha.is_none()
            && self.author.is_none()
            && self.date.is_none()
            && self.draft.merge.is_none()
            && self.draft.files.is_empty()
    }

    /// Finish the record. Records that never saw a `commit` line are dropped.
    fn into_commit(self) -> Option<Commit> {
        if self.sha.is_none() {
            if !self.is_empty() {
                debug!(
                    files = self.draft.files.len(),
                    "Dropping log lines that appeared before any commit"
                );
            }
            return None;
        }
        let Self {
            sha,
            author,
            date,
            mut draft,
        } = self;
        let sha = sha.unwrap_or_default();

        if author.is_none() {
            warn!(%sha, "Commit has no Author line");
        }
        if date.is_none() {
            warn!(%sha, "Commit has no Date line");
        }
        draft.sha = sha;
        draft.author = author.unwrap_or_default();
        draft.date = date.unwrap_or_default();
        Some(draft)
    }
}

/// Incremental parser for `git log --raw` output
///
/// Feed lines with [`LogParser::process_line`] and call
/// [`LogParser::finish`] once the input is exhausted; `finish` always
/// flushes the commit that was being accumulated.
#[derive(Debug, Default)]
pub struct LogParser {
    pending: PendingCommit,
    commits: Vec<Commit>,
    line_number: usize,
}

impl LogParser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of complete commits parsed so far
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    /// Process a single line of output (without its trailing newline)
    ///
    /// # Errors
    ///
    /// Returns `LogError::MalformedFileStat` if a raw file-stats line is malformed.
    pub fn process_line(&mut self, line: &str) -> Result<(), LogError> {
        self.line_number += 1;

        match classify(line, self.line_number)? {
            LogLine::Blank => {}
            LogLine::Commit(sha) => {
                let finished = std::mem::replace(&mut self.pending, PendingCommit::started(sha));
                self.flush(finished);
            }
            LogLine::Author(author) => self.pending.author = Some(author.to_string()),
            LogLine::Date(date) => self.pending.date = Some(date.to_string()),
            LogLine::Merge(merge) => self.pending.draft.merge = Some(merge.to_string()),
            LogLine::FileStat { path, change } => self.pending.draft.insert_file(path, change),
            LogLine::Other(text) => {
                trace!(line = self.line_number, text, "Ignoring unrecognised log line");
            }
        }
        Ok(())
    }

    /// Flush the last commit and return everything parsed, newest first
    #[must_use]
    pub fn finish(mut self) -> History {
        let last = std::mem::take(&mut self.pending);
        self.flush(last);
        debug!(
            commits = self.commits.len(),
            lines = self.line_number,
            "Finished parsing git log"
        );
        History::new(self.commits)
    }

    fn flush(&mut self, pending: PendingCommit) {
        if let Some(commit) = pending.into_commit() {
            self.commits.push(commit);
        }
    }
}

/// Parse complete `git log --raw` output
///
/// # Errors
///
/// Returns `LogError::MalformedFileStat` if any raw file-stats line is malformed.
pub fn parse_log(output: &str) -> Result<History, LogError> {
    let mut parser = LogParser::new();
    for line in output.lines() {
        parser.process_line(line)?;
    }
    Ok(parser.finish())
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn hex(len: usize) -> impl Strategy<Value = String> {
        proptest::string::string_regex(&format!("[0-9a-f]{{{len}}}")).expect("valid regex")
    }

    fn file_strategy() -> impl Strategy<Value = (String, String, String, char)> {
        (
            "[a-z][a-z0-9_/ .-]{0,20}[a-z0-9]",
            hex(7),
            hex(7),
            prop::sample::select(vec!['A', 'M', 'D', 'T']),
        )
    }

    fn commit_strategy() -> impl Strategy<Value = (String, Vec<(String, String, String, char)>)> {
        (hex(40), proptest::collection::vec(file_strategy(), 0..5))
    }

    fn render(commits: &[(String, Vec<(String, String, String, char)>)]) -> String {
        let mut out = String::new();
        for (sha, files) in commits {
            out.push_str(&format!(
                "commit {sha}\nAuthor: Someone <s@x.com>\nDate:   today\n\n    message\n\n"
            ));
            for (path, old, new, kind) in files {
                out.push_str(&format!(":100644 100644 {old}... {new}... {kind}\t{path}\n"));
            }
            out.push('\n');
        }
        out
    }

    proptest! {
        /// Property: one record per `commit` line, files matching the stat lines that follow it
        #[test]
        fn prop_one_record_per_commit_line(
            commits in proptest::collection::vec(commit_strategy(), 0..6)
        ) {
            let history = parse_log(&render(&commits)).expect("well-formed log parses");
            prop_assert_eq!(history.len(), commits.len());

            for (parsed, (sha, files)) in history.commits().iter().zip(&commits) {
                prop_assert_eq!(&parsed.sha, sha);

                // Last stat line for a path wins, at the position of its first appearance
                let mut expected: Vec<(String, String)> = Vec::new();
                for (path, _, new, _) in files {
                    match expected.iter_mut().find(|(p, _)| p == path) {
                        Some(entry) => entry.1 = new.clone(),
                        None => expected.push((path.clone(), new.clone())),
                    }
                }
                let actual: Vec<(String, String)> = parsed
                    .files
                    .iter()
                    .map(|f| (f.path.clone(), f.change.current_sha.clone()))
                    .collect();
                prop_assert_eq!(actual, expected);
            }
        }

        /// Property: arbitrary text either parses or fails with a line-numbered error
        #[test]
        fn prop_arbitrary_text_never_panics(text in ".{0,200}") {
            match parse_log(&text) {
                Ok(history) => prop_assert!(history.len() <= 1),
                Err(LogError::MalformedFileStat { line_number, .. }) => prop_assert!(line_number >= 1),
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }

        /// Property: non-ASCII text right after a mode prefix never panics
        #[test]
        fn prop_mode_prefix_with_multibyte_tail(
            digits in "[0-7]{0,6}",
            tail in "[éß€😀 a-z]{0,12}",
        ) {
            let line = format!(":{digits}{tail}");
            match parse_log(&line) {
                Ok(history) => prop_assert!(history.is_empty()),
                Err(LogError::MalformedFileStat { line_number, .. }) => prop_assert_eq!(line_number, 1),
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}
