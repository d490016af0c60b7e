//! Git Operations Module
//!
//! Organized Git-related functionality for the Pushy CLI tool, split into
//! focused submodules: the subprocess runner, repository path helpers, and
//! the porcelain commands the workflow sequences.

pub mod commands;
pub mod repository;
pub mod runner;

pub use commands::*;
pub use repository::*;
pub use runner::*;
