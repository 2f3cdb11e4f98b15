//! Shared test utilities for the forksync workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures
//! - [`tree`]: [`tree::TreePair`] builder for paired chromium/modifications trees

pub mod git;
pub mod tree;
