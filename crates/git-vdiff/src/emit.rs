// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Formatting viewer commands and commit dumps
//!
//! Each reviewed file gets a run-wide sequence number, and two
//! process-substitution expressions that print a header followed by the
//! old or new blob:
//!
//! ```text
//! <( echo abc1234... e9e6cc9:a/README.md [M] Mon Jan 5 ... "#3" ; git show e9e6cc9 )
//! ```
//!
//! In the default mode only the last file of each commit is handed to
//! `vimdiff`; `--every-file` emits a command per file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use vdiff_log::{ChangedFile, Commit, History};

use crate::filter::AuthorFilter;

/// Viewer invoked by the emitted commands
pub const VIEWER: &str = "vimdiff";

/// What to print for each included commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One viewer command per commit, diffing its last file
    #[default]
    LastFile,
    /// One viewer command per changed file
    EveryFile,
    /// Human-readable commit header and raw file lines
    Debug,
    /// One JSON object per commit
    Json,
}

/// Which side of the diff an expression shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Content before the commit (`a/`)
    Previous,
    /// Content after the commit (`b/`)
    Current,
}

impl Side {
    fn prefix(self) -> &'static str {
        match self {
            Self::Previous => "a",
            Self::Current => "b",
        }
    }
}

/// Shell expression that prints a header line and then the blob for `side`.
///
/// `sequence` is the file's 1-based position across the whole run.
#[must_use]
pub fn blob_expression(commit: &Commit, file: &ChangedFile, side: Side, sequence: usize) -> String {
    let blob = match side {
        Side::Previous => &file.change.previous_sha,
        Side::Current => &file.change.current_sha,
    };
    format!(
        "<( echo {short}... {blob}:{prefix}/{path} [{kind}] {date} \"#{sequence}\" ; git show {blob} )",
        short = commit.short_sha(),
        prefix = side.prefix(),
        path = file.path,
        kind = file.change.change_type,
        date = commit.date,
    )
}

/// The pair of expressions for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPair {
    /// Previous revision
    pub a: String,
    /// Current revision
    pub b: String,
}

impl DiffPair {
    /// Build both sides for `file`
    #[must_use]
    pub fn new(commit: &Commit, file: &ChangedFile, sequence: usize) -> Self {
        Self {
            a: blob_expression(commit, file, Side::Previous, sequence),
            b: blob_expression(commit, file, Side::Current, sequence),
        }
    }

    /// `vimdiff -u <vimrc> <a> <b>`
    #[must_use]
    pub fn viewer_command(&self, vimrc: &Path) -> String {
        format!("{VIEWER} -u {} {} {}", vimrc.display(), self.a, self.b)
    }
}

/// Raw-format line for the debug dump
#[must_use]
pub fn debug_file_line(file: &ChangedFile) -> String {
    let change = &file.change;
    format!(
        ":{} {} {}... {}... {}  {}",
        change.previous_mode,
        change.current_mode,
        change.previous_sha,
        change.current_sha,
        change.change_type,
        file.path
    )
}

/// Totals from one emitter run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitSummary {
    /// Commits that passed the filter
    pub commits: usize,
    /// Value of the file counter at the end of the run
    pub files: usize,
}

/// Writes viewer commands (or dumps) for the commits that pass a filter
#[derive(Debug, Clone)]
pub struct Emitter {
    filter: AuthorFilter,
    mode: OutputMode,
    vimrc: PathBuf,
}

impl Emitter {
    /// Create an emitter
    #[must_use]
    pub fn new(filter: AuthorFilter, mode: OutputMode, vimrc: impl Into<PathBuf>) -> Self {
        Self {
            filter,
            mode,
            vimrc: vimrc.into(),
        }
    }

    /// Emit every included commit of `history`, oldest first
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn emit<W: Write>(&self, history: &History, out: &mut W) -> io::Result<EmitSummary> {
        let mut summary = EmitSummary::default();

        for commit in history.iter_oldest_first() {
            if !self.filter.includes(commit) {
                trace!(sha = %commit.sha, author = %commit.author, "Skipping commit");
                continue;
            }
            summary.commits += 1;
            summary.files = self.emit_commit(commit, summary.files, out)?;
        }

        debug!(
            commits = summary.commits,
            files = summary.files,
            "Finished emitting"
        );
        Ok(summary)
    }

    /// Emit one commit. `counter` is the number of files emitted so far in
    /// the run; the updated count is returned.
    fn emit_commit<W: Write>(&self, commit: &Commit, counter: usize, out: &mut W) -> io::Result<usize> {
        let mut counter = counter;
        let mut last = None;

        for file in &commit.files {
            counter += 1;
            let pair = DiffPair::new(commit, file, counter);
            if self.mode == OutputMode::EveryFile {
                writeln!(out, "{}", pair.viewer_command(&self.vimrc))?;
            }
            last = Some(pair);
        }

        match self.mode {
            OutputMode::LastFile => match last {
                Some(pair) => writeln!(out, "{}", pair.viewer_command(&self.vimrc))?,
                None => debug!(sha = %commit.sha, "Commit has no file changes"),
            },
            OutputMode::EveryFile => {}
            OutputMode::Debug => write_debug(commit, out)?,
            OutputMode::Json => {
                serde_json::to_writer(&mut *out, commit)?;
                writeln!(out)?;
            }
        }
        Ok(counter)
    }
}

fn write_debug<W: Write>(commit: &Commit, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "commit {}", commit.sha)?;
    writeln!(out, "Author: {}", commit.author)?;
    writeln!(out, "Date:   {}", commit.date)?;
    for file in &commit.files {
        writeln!(out, "{}", debug_file_line(file))?;
    }
    Ok(())
}
