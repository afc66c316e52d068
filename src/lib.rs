//! create-prettier-config library
//!
//! Scaffolds Prettier config files into a project and reverts them again.
//! The settings merge is pure text surgery in [`settings::block`]; the
//! package manager and the confirmation prompt sit behind traits so the
//! commands can run against any directory.

pub mod commands;
pub mod config;
pub mod error;
pub mod package_manager;
pub mod prompt;
pub mod settings;
pub mod templates;
