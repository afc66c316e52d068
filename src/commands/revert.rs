//! Revert command - Undo what install did
//!
//! The settings file is restored wholesale from the backup taken at install
//! time. If the user edited it since then, nothing is touched until they
//! confirm.

use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

use super::utils;
use crate::config::{Config, BACKUP_FILE, MANAGED_FILES, SETTINGS_FILE};
use crate::error::{Error, Result};
use crate::package_manager::{Npm, PackageManager};
use crate::prompt::Confirm;
use crate::settings::{self, SettingsDiff};

const DRIFT_QUESTION: &str = "'settings.json' has been modified since setup. Reverting will overwrite changes. Proceed? (y/N): ";

/// How a revert run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertOutcome {
    Completed,
    /// The user declined the drift prompt; nothing was changed
    Cancelled,
}

/// Execute the revert command
pub fn execute(
    config: &Config,
    package_manager: &dyn PackageManager,
    prompt: &mut dyn Confirm,
) -> Result<RevertOutcome> {
    println!();
    println!("{}", "Reverting changes...".bold());

    let settings_path = config.settings_path();
    let backup_path = config.backup_path();
    let live = utils::read_optional(&settings_path)?;
    let backup = utils::read_optional(&backup_path)?;

    if let (Some(live), Some(backup)) = (&live, &backup) {
        if let Some(details) = detect_drift(live, backup, &settings_path) {
            for line in &details {
                println!("  {}", line);
            }
            let proceed = prompt
                .confirm(DRIFT_QUESTION)
                .map_err(|e| Error::io("<stdin>", e))?;
            if !proceed {
                println!("{}", "Revert cancelled.".red());
                return Ok(RevertOutcome::Cancelled);
            }
        }
    }

    for name in MANAGED_FILES {
        if utils::remove_if_exists(&config.managed_path(name))? {
            println!("{} {}", "Removed:".green(), name);
        }
    }

    match (&backup, &live) {
        (Some(backup), _) => {
            utils::write_file(&settings_path, backup.as_bytes())?;
            println!("{} {}", "Restored:".green(), SETTINGS_FILE);
        }
        (None, Some(live)) if settings::has_block(live) => {
            strip_managed_block(live, &settings_path)?;
        }
        _ => {}
    }

    if utils::remove_if_exists(&backup_path)? {
        println!("{} {}", "Removed:".green(), BACKUP_FILE);
    }

    println!();
    println!("Uninstalling {}...", config.package);
    match package_manager.uninstall(&config.package) {
        Ok(()) => println!("{} {}", "Uninstalled:".green(), config.package),
        Err(e) => eprintln!(
            "{} {}. Please remove it manually: {}",
            "Warning:".yellow(),
            e,
            Npm::uninstall_command(&config.package)
        ),
    }

    println!();
    println!("{}", "Revert complete!".green());

    Ok(RevertOutcome::Completed)
}

/// Compare the live settings with what install produced from the backup
///
/// Returns `None` when they match, otherwise lines describing the drift.
/// The comparison is on text, so comment-only edits count as drift too.
pub fn detect_drift(live: &str, backup: &str, path: &Path) -> Option<Vec<String>> {
    let expected = settings::merge_block(backup);
    if format!("{}\n", live.trim_end()) == expected {
        return None;
    }

    let details = match (
        settings::parse_settings(&expected, path),
        settings::parse_settings(live, path),
    ) {
        (Ok(before), Ok(after)) => {
            let diff = SettingsDiff::between(&before, &after);
            if diff.is_empty() {
                vec!["comments or formatting changed".to_string()]
            } else {
                diff.summary()
            }
        }
        (Err(e), _) | (_, Err(e)) => vec![format!("contents differ ({})", e)],
    };
    Some(details)
}

/// No backup means the settings file was absent before install: drop the
/// managed block and delete the file (and its now empty directory) if
/// nothing else is left in it.
fn strip_managed_block(live: &str, settings_path: &Path) -> Result<()> {
    let remaining = settings::remove_block(live);
    let only_braces = remaining.split_whitespace().collect::<String>() == "{}";

    if only_braces {
        fs::remove_file(settings_path).map_err(|e| Error::io(settings_path, e))?;
        println!("{} {}", "Removed:".green(), SETTINGS_FILE);

        // Install creates the editor directory when the settings were absent
        if let Some(dir) = settings_path.parent() {
            if utils::remove_dir_if_empty(dir)? {
                println!("{} {}", "Removed:".green(), dir.display());
            }
        }
    } else {
        utils::write_file(settings_path, remaining.as_bytes())?;
        println!("{} Prettier settings from {}", "Removed:".green(), SETTINGS_FILE);
    }
    Ok(())
}
