// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for git-vdiff
//!
//! Command-line flags and the environment variables the tool has always
//! honoured (`GIT_VDIFF_USER`, `ALWAYS_INCLUDE`, `GIT_VDIFF_DEBUG`, `HOME`)
//! are collected here and resolved into the settings the emitter needs.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::emit::OutputMode;
use crate::filter::AuthorFilter;

/// File name of the vimdiff configuration looked up in the home directory
pub const VIMRC_FILE_NAME: &str = ".my-vimdiffrc";

/// Review one author's git commits file by file in vimdiff
///
/// Prints one `vimdiff` command per qualifying commit, oldest first, ready to
/// be run by a shell that supports process substitution.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "git-vdiff")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Repository directory to read history from
    ///
    /// Defaults to the current working directory.
    pub working_directory: Option<PathBuf>,

    /// Only review commits whose author contains this string
    ///
    /// Defaults to the login name in `USER`.
    #[arg(short, long, env = "GIT_VDIFF_USER")]
    pub user: Option<String>,

    /// Whitespace-separated commit hashes to review regardless of author
    #[arg(long, env = "ALWAYS_INCLUDE", value_name = "HASHES")]
    pub always_include: Option<String>,

    /// Print a readable dump of each commit instead of viewer commands
    ///
    /// Any value enables it.
    #[arg(
        long,
        env = "GIT_VDIFF_DEBUG",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "1",
        value_name = "ANY"
    )]
    pub debug: Option<String>,

    /// vimdiff configuration file passed with `-u`
    ///
    /// Defaults to ~/.my-vimdiffrc.
    #[arg(long)]
    pub vimrc: Option<PathBuf>,

    /// Emit one viewer command per changed file instead of one per commit
    #[arg(long, default_value = "false")]
    pub every_file: bool,

    /// Print each included commit as a JSON object per line
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// git executable to run
    #[arg(long, env = "GIT_VDIFF_GIT")]
    pub git: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Which kind of output to produce.
    ///
    /// `--json` wins over debug mode, which wins over `--every-file`.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.debug.is_some() {
            OutputMode::Debug
        } else if self.every_file {
            OutputMode::EveryFile
        } else {
            OutputMode::LastFile
        }
    }

    /// Build the author filter, falling back to `USER` when no user was given
    #[must_use]
    pub fn author_filter(&self) -> AuthorFilter {
        let user = resolve_user(self.user.clone(), std::env::var("USER").ok());
        AuthorFilter::new(user, self.always_include.as_deref())
    }

    /// Path of the vimdiff configuration file
    #[must_use]
    pub fn vimrc_path(&self) -> PathBuf {
        self.vimrc
            .clone()
            .unwrap_or_else(|| default_vimrc(std::env::var_os("HOME")))
    }

    /// git executable to run
    #[must_use]
    pub fn git_program(&self) -> &str {
        self.git.as_deref().unwrap_or(vdiff_log::command::DEFAULT_GIT)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is given but doesn't exist
    /// or isn't a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.working_directory {
            if !dir.exists() {
                return Err(ConfigError::WorkingDirectoryNotFound(dir.clone()));
            }
            if !dir.is_dir() {
                return Err(ConfigError::WorkingDirectoryNotDirectory(dir.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// The explicit user if given, else the login user
#[must_use]
pub fn resolve_user(explicit: Option<String>, login: Option<String>) -> Option<String> {
    explicit.or(login)
}

/// `$HOME/.my-vimdiffrc`, using the platform home directory when `HOME` is unset
#[must_use]
pub fn default_vimrc(home: Option<OsString>) -> PathBuf {
    home.map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(VIMRC_FILE_NAME)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Working directory not found
    #[error("Working directory not found: {0}")]
    WorkingDirectoryNotFound(PathBuf),

    /// Working directory is not a directory
    #[error("Working directory is not a directory: {0}")]
    WorkingDirectoryNotDirectory(PathBuf),
}
