// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Environment variable handling
//!
//! Kept to a single test in its own binary: it mutates the process
//! environment, which would race with tests running in parallel.


use clap::Parser;
use git_vdiff::config::Config;
use git_vdiff::emit::OutputMode;
use std::path::PathBuf;
use test_utils::EnvGuard;

#[test]
fn test_environment_variables() {
    // GIT_VDIFF_USER beats USER
    {
        let _user = EnvGuard::set("USER", "login-name");
        let _vdiff_user = EnvGuard::set("GIT_VDIFF_USER", "jane");
        let config = Config::try_parse_from(["git-vdiff"]).expect("parse");
        assert_eq!(config.author_filter().user(), Some("jane"));
    }

    // USER is the fallback
    {
        let _user = EnvGuard::set("USER", "login-name");
        let _vdiff_user = EnvGuard::remove("GIT_VDIFF_USER");
        let config = Config::try_parse_from(["git-vdiff"]).expect("parse");
        assert_eq!(config.author_filter().user(), Some("login-name"));
    }

    // Neither set: no filter at all
    {
        let _user = EnvGuard::remove("USER");
        let _vdiff_user = EnvGuard::remove("GIT_VDIFF_USER");
        let config = Config::try_parse_from(["git-vdiff"]).expect("parse");
        assert_eq!(config.author_filter().user(), None);
    }

    // An empty GIT_VDIFF_USER is still set: it matches every author
    {
        let _user = EnvGuard::set("USER", "login-name");
        let _vdiff_user = EnvGuard::set("GIT_VDIFF_USER", "");
        let config = Config::try_parse_from(["git-vdiff"]).expect("parse");
        assert_eq!(config.author_filter().user(), Some(""));
    }

    // ALWAYS_INCLUDE is split on whitespace
    {
        let _include = EnvGuard::set("ALWAYS_INCLUDE", "abc1234  def5678\t999");
        let config = Config::try_parse_from(["git-vdiff"]).expect("parse");
        assert_eq!(
            config.author_filter().always_include(),
            ["abc1234", "def5678", "999"]
        );
    }

    // Any GIT_VDIFF_DEBUG value selects debug mode
    {
        let _debug = EnvGuard::set("GIT_VDIFF_DEBUG", "no");
        let config = Config::try_parse_from(["git-vdiff"]).expect("parse");
        assert_eq!(config.output_mode(), OutputMode::Debug);
    }
    {
        let _debug = EnvGuard::set("GIT_VDIFF_DEBUG", "");
        let config = Config::try_parse_from(["git-vdiff"]).expect("parse");
        assert_eq!(config.output_mode(), OutputMode::Debug);
    }
    {
        let _debug = EnvGuard::remove("GIT_VDIFF_DEBUG");
        let config = Config::try_parse_from(["git-vdiff"]).expect("parse");
        assert_eq!(config.output_mode(), OutputMode::LastFile);
    }

    // HOME locates the vimdiff configuration
    {
        let _home = EnvGuard::set("HOME", "/home/jane");
        let config = Config::try_parse_from(["git-vdiff"]).expect("parse");
        assert_eq!(
            config.vimrc_path(),
            PathBuf::from("/home/jane/.my-vimdiffrc")
        );
    }

    // GIT_VDIFF_GIT selects the executable
    {
        let _git = EnvGuard::set("GIT_VDIFF_GIT", "/opt/git/bin/git");
        let config = Config::try_parse_from(["git-vdiff"]).expect("parse");
        assert_eq!(config.git_program(), "/opt/git/bin/git");
    }
}
