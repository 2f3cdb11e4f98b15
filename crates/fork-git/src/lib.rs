//! Version-control status queries for forksync
//!
//! Reports a working tree's changes as porcelain-style status lines through
//! interchangeable providers.

pub mod error;
pub mod git_cli;
pub mod libgit2;
pub mod porcelain;
pub mod provider;

pub use error::{Error, Result};
pub use git_cli::GitCli;
pub use libgit2::LibGit2;
pub use porcelain::{StatusLine, parse_porcelain};
pub use provider::{StatusBackend, StatusProvider};
