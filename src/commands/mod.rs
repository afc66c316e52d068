//! CLI commands

pub mod install;
pub mod revert;
pub mod utils;
