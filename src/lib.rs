pub mod cli;
pub mod config;
pub mod errors;
pub mod git;
pub mod prompt;
pub mod utils;
pub mod workflow;
