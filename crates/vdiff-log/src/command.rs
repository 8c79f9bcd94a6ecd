// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Running `git log` as a subprocess

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::commit::History;
use crate::error::LogError;
use crate::parser::parse_log;

/// Arguments passed to `git`.
///
/// `--no-renames` keeps every raw line in single-letter form and
/// `--no-decorate` keeps `commit` lines free of ref names.
pub const LOG_ARGS: &[&str] = &["log", "--raw", "--no-color", "--no-decorate", "--no-renames"];

/// Default git executable
pub const DEFAULT_GIT: &str = "git";

/// Configuration for reading history from a repository
#[derive(Debug, Clone)]
pub struct GitLog {
    program: String,
    working_dir: Option<PathBuf>,
}

impl Default for GitLog {
    fn default() -> Self {
        Self {
            program: DEFAULT_GIT.to_string(),
            working_dir: None,
        }
    }
}

impl GitLog {
    /// Read history from the current directory using `git` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different git executable
    #[must_use]
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run git in `dir` instead of the current directory
    #[must_use]
    pub fn working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Run the log command and return its standard output
    ///
    /// # Errors
    ///
    /// Returns `LogError::InvalidWorkingDirectory` if the working directory is
    /// not a directory, `LogError::Spawn` if git cannot be started, and
    /// `LogError::CommandFailed` if it exits unsuccessfully.
    pub fn output(&self) -> Result<String, LogError> {
        let mut command = Command::new(&self.program);
        command.args(LOG_ARGS);

        if let Some(dir) = &self.working_dir {
            if !dir.is_dir() {
                return Err(LogError::InvalidWorkingDirectory { path: dir.clone() });
            }
            command.current_dir(dir);
        }

        debug!(program = %self.program, args = ?LOG_ARGS, dir = ?self.working_dir, "Running git log");
        let output = command.output().map_err(|source| LogError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(LogError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run the log command and parse its output
    ///
    /// # Errors
    ///
    /// Returns any error from [`GitLog::output`] or from parsing.
    pub fn read_history(&self) -> Result<History, LogError> {
        let output = self.output()?;
        let history = parse_log(&output)?;
        info!(commits = history.len(), "Read git history");
        Ok(history)
    }
}
