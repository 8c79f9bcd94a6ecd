//! git-vdiff: review one author's git history file by file in vimdiff
//!
//! Prints shell commands on stdout; logs go to stderr.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use git_vdiff::config::Config;
use tracing::{debug, error};

fn main() -> ExitCode {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match git_vdiff::run(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) if is_broken_pipe(&err) => {
            debug!("Output closed early");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|e| e.kind() == io::ErrorKind::BrokenPipe)
}
