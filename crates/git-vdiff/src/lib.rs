// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! git-vdiff library
//!
//! This module exports the core functionality of git-vdiff for use in
//! integration tests and as a library.

pub mod config;
pub mod emit;
pub mod filter;

use std::io::Write;

use anyhow::Context;
use tracing::info;
use vdiff_log::GitLog;

use crate::config::Config;
use crate::emit::{EmitSummary, Emitter};

/// Read the history selected by `config` and write the emitter output to `out`
///
/// # Errors
///
/// Returns an error if the configuration is invalid, git cannot be run or
/// its output cannot be parsed, or writing to `out` fails.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<EmitSummary> {
    config.validate()?;

    let filter = config.author_filter();
    info!(
        user = filter.user().unwrap_or("<everyone>"),
        always_include = filter.always_include().len(),
        "Selecting commits"
    );

    let mut log = GitLog::new().program(config.git_program());
    if let Some(dir) = &config.working_directory {
        log = log.working_dir(dir);
    }
    let history = log.read_history().context("Failed to read git history")?;

    let emitter = Emitter::new(filter, config.output_mode(), config.vimrc_path());
    let summary = emitter
        .emit(&history, out)
        .context("Failed to write output")?;
    out.flush().context("Failed to write output")?;

    info!(
        commits = summary.commits,
        files = summary.files,
        "Done"
    );
    Ok(summary)
}
