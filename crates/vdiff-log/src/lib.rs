// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! vdiff-log: Git history parsing for git-vdiff
//!
//! This library crate runs `git log --raw` and turns its text output into
//! commit records with their per-file blob changes.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use vdiff_log::GitLog;
//!
//! let history = GitLog::new().working_dir(".").read_history().expect("read history");
//!
//! for c in history.iter_oldest_first() {
//!     println!("{} {} files", c.short_sha(), c.files.len());
//! }
//! ```

pub mod command;
pub mod commit;
pub mod error;
pub mod line;
pub mod parser;

pub use command::GitLog;
pub use commit::{ChangeType, ChangedFile, Commit, FileChange, History};
pub use error::LogError;
pub use parser::{LogParser, parse_log};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::command::GitLog;
    pub use crate::commit::{Commit, History};
    pub use crate::error::LogError;
    pub use crate::parser::parse_log;
}
