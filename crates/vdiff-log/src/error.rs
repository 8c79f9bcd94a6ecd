// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for vdiff-log

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while reading or parsing git history
#[derive(Debug, Error)]
pub enum LogError {
    /// The git executable could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The git command ran but exited unsuccessfully
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        /// Program that was invoked
        program: String,
        /// Exit status reported by the process
        status: ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The requested working directory does not exist or is not a directory
    #[error("Invalid working directory: {}", path.display())]
    InvalidWorkingDirectory {
        /// The offending path
        path: PathBuf,
    },

    /// A raw file-stats line did not have the expected six fields
    #[error("Malformed file-stats line {line_number}: {line:?}")]
    MalformedFileStat {
        /// 1-based line number within the log output
        line_number: usize,
        /// The full text of the line
        line: String,
    },
}

impl LogError {
    /// Whether this error came from running the command rather than from its output
    #[must_use]
    pub fn is_command_error(&self) -> bool {
        !matches!(self, Self::MalformedFileStat { .. })
    }
}
