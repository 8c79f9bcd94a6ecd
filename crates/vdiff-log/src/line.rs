// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Classification of single `git log --raw` output lines
//!
//! Each line of log output maps onto at most one field of a commit record.
//! [`classify`] turns a line into a [`LogLine`] tag so the parser only has to
//! decide what to do with each kind, not how to recognise it.

use crate::commit::{ChangeType, FileChange};
use crate::error::LogError;

/// What a single line of log output contributes to the commit being built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine<'a> {
    /// Blank line or indented commit message text
    Blank,
    /// `commit <sha>`: starts a new commit
    Commit(&'a str),
    /// `Author: <who>`
    Author(&'a str),
    /// `Date:   <when>`
    Date(&'a str),
    /// `Merge: <parents>`
    Merge(&'a str),
    /// `:<mode> <mode> <sha>... <sha>... <X><whitespace><path>`
    FileStat {
        /// Path of the changed file
        path: &'a str,
        /// Parsed modes, blobs and status
        change: FileChange,
    },
    /// Anything else git printed
    Other(&'a str),
}

/// Classify one line of log output.
///
/// `line_number` is 1-based and only used for error reporting.
///
/// # Errors
///
/// Returns `LogError::MalformedFileStat` when a line starts like a raw
/// file-stats line (`:` and six octal digits) but the rest does not match.
pub fn classify(line: &str, line_number: usize) -> Result<LogLine<'_>, LogError> {
    if line.is_empty() || line.starts_with(char::is_whitespace) {
        return Ok(LogLine::Blank);
    }
    if let Some(sha) = line.strip_prefix("commit ") {
        return Ok(LogLine::Commit(sha.trim()));
    }
    if looks_like_file_stat(line) {
        return parse_file_stat(line)
            .map(|(path, change)| LogLine::FileStat { path, change })
            .ok_or_else(|| LogError::MalformedFileStat {
                line_number,
                line: line.to_string(),
            });
    }
    if let Some(date) = line.strip_prefix("Date:") {
        if date.starts_with(' ') {
            return Ok(LogLine::Date(date.trim_start_matches(' ')));
        }
    }
    if let Some(author) = line.strip_prefix("Author: ") {
        return Ok(LogLine::Author(author));
    }
    if let Some(merge) = line.strip_prefix("Merge: ") {
        return Ok(LogLine::Merge(merge));
    }
    Ok(LogLine::Other(line))
}

/// `:` followed by a six digit octal mode and a space
fn looks_like_file_stat(line: &str) -> bool {
    line.starts_with(':')
        && line.as_bytes().get(1..8).is_some_and(|head| {
            head[..6].iter().all(|b| (b'0'..=b'7').contains(b)) && head[6] == b' '
        })
}

/// Parse the six fields of a raw diff line.
///
/// Hashes may carry a trailing ellipsis (older git, or
/// `GIT_PRINT_SHA1_ELLIPSIS=yes`); it is stripped. The path is whatever follows
/// the status letter and its separating whitespace, so it may contain spaces.
fn parse_file_stat(line: &str) -> Option<(&str, FileChange)> {
    let rest = line.strip_prefix(':')?;
    let (previous_mode, rest) = next_field(rest)?;
    let (current_mode, rest) = next_field(rest)?;
    let (previous_sha, rest) = next_field(rest)?;
    let (current_sha, rest) = next_field(rest)?;
    let (status, path) = next_field(rest)?;

    if !is_mode(previous_mode) || !is_mode(current_mode) || path.is_empty() {
        return None;
    }
    let change_type = single_upper(status)?;

    Some((
        path,
        FileChange {
            previous_mode: previous_mode.to_string(),
            current_mode: current_mode.to_string(),
            previous_sha: blob_hash(previous_sha)?.to_string(),
            current_sha: blob_hash(current_sha)?.to_string(),
            change_type: ChangeType::from(change_type),
        },
    ))
}

/// Split off a whitespace-terminated field, returning it and the remainder
/// with leading whitespace removed.
fn next_field(s: &str) -> Option<(&str, &str)> {
    let end = s.find(char::is_whitespace)?;
    let (field, rest) = s.split_at(end);
    Some((field, rest.trim_start()))
}

fn is_mode(field: &str) -> bool {
    field.len() == 6 && field.bytes().all(|b| (b'0'..=b'7').contains(&b))
}

fn blob_hash(field: &str) -> Option<&str> {
    let hash = field.trim_end_matches('.');
    let valid = !hash.is_empty()
        && hash
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    valid.then_some(hash)
}

fn single_upper(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(c),
        _ => None,
    }
}
