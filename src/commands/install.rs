//! Install command - Scaffold Prettier config into a project
//!
//! Copies the managed config files, backs up and merges the editor settings,
//! then installs the formatter as a dev dependency.

use owo_colors::OwoColorize;

use super::utils;
use crate::config::{Config, BACKUP_FILE, MANAGED_FILES, SETTINGS_FILE};
use crate::error::Result;
use crate::package_manager::{Npm, PackageManager};
use crate::settings;
use crate::templates;

/// What happened to the settings backup during install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupAction {
    /// A fresh copy of the settings was written
    Written,
    /// Settings were already managed, so the earlier pre-install copy was kept
    Kept,
    /// Nothing to back up (settings absent, or already managed without a backup)
    Skipped,
}

/// Result of an install run
#[derive(Debug)]
pub struct InstallSummary {
    pub backup: BackupAction,
    /// Whether the package manager step succeeded
    pub package_installed: bool,
}

/// Execute the install command
///
/// Fails only on filesystem errors. A package manager failure is reported
/// and leaves the written config files in place.
pub fn execute(config: &Config, package_manager: &dyn PackageManager) -> Result<InstallSummary> {
    println!();
    println!("{}", "Setting up Prettier config files...".bold());

    for name in MANAGED_FILES {
        let content = templates::load(&config.templates, name)?;
        utils::write_file(&config.managed_path(name), &content)?;
        println!("{} {}", "Created:".green(), name);
    }

    let settings_path = config.settings_path();
    let backup_path = config.backup_path();
    let existing = utils::read_optional(&settings_path)?;

    let backup = match &existing {
        None => {
            // A backup left from an earlier run no longer describes the settings
            if utils::remove_if_exists(&backup_path)? {
                println!("{} stale {}", "Removed:".green(), BACKUP_FILE);
            }
            BackupAction::Skipped
        }
        Some(content) if settings::has_block(content) => {
            if backup_path.exists() {
                println!("{} existing {}", "Kept:".blue(), BACKUP_FILE);
                BackupAction::Kept
            } else {
                // Written by an earlier install into a project that had no settings
                BackupAction::Skipped
            }
        }
        Some(content) => {
            // Empty files are copied too, so revert can tell them apart from absent ones
            utils::write_file(&backup_path, content.as_bytes())?;
            println!("{} existing {}", "Backed up:".blue(), SETTINGS_FILE);
            BackupAction::Written
        }
    };

    let merged = settings::merge_block(existing.as_deref().unwrap_or_default());
    utils::write_file(&settings_path, merged.as_bytes())?;
    println!("{} Prettier settings into {}", "Injected:".green(), SETTINGS_FILE);

    println!();
    println!("Installing {}...", config.package);
    let package_installed = match package_manager.install_dev(&config.package) {
        Ok(()) => {
            println!("{} {}", "Installed:".green(), config.package);
            true
        }
        Err(e) => {
            eprintln!(
                "{} {}. Please run manually: {}",
                "Warning:".yellow(),
                e,
                Npm::install_command(&config.package)
            );
            false
        }
    };

    println!();
    println!("{}", "Setup complete!".green());

    Ok(InstallSummary {
        backup,
        package_installed,
    })
}
