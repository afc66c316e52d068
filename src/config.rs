//! Run configuration and project-relative paths

use std::path::{Path, PathBuf};

/// Environment variable that points the installer at an on-disk template directory
pub const TEMPLATES_ENV: &str = "CREATE_PRETTIER_CONFIG_TEMPLATES";

/// Dependency installed on setup and removed on revert
pub const PACKAGE_NAME: &str = "prettier";

/// Config files created by install and deleted by revert, relative to the project root
pub const MANAGED_FILES: [&str; 2] = [".prettierrc", ".prettierignore"];

/// Editor settings file, relative to the project root
pub const SETTINGS_FILE: &str = ".vscode/settings.json";

/// Pre-install copy of the settings file, relative to the project root
pub const BACKUP_FILE: &str = ".vscode/settings.backup.prettier.json";

/// Where the managed file templates come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary
    Embedded,
    /// A directory holding one file per managed file name
    Dir(PathBuf),
}

/// Everything an install or revert run needs to know about its environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the config files are written into
    pub project_root: PathBuf,
    pub templates: TemplateSource,
    /// Dependency name handed to the package manager
    pub package: String,
}

impl Config {
    /// Config for `project_root` with embedded templates
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            templates: TemplateSource::Embedded,
            package: PACKAGE_NAME.to_string(),
        }
    }

    /// Config for `project_root`, honoring the template directory override
    pub fn from_env(project_root: impl Into<PathBuf>) -> Self {
        let mut config = Self::new(project_root);
        if let Some(dir) = std::env::var_os(TEMPLATES_ENV).filter(|v| !v.is_empty()) {
            config.templates = TemplateSource::Dir(PathBuf::from(dir));
        }
        config
    }

    /// Absolute path of a managed file
    pub fn managed_path(&self, name: &str) -> PathBuf {
        self.project_root.join(name)
    }

    /// Get the settings file path (<root>/.vscode/settings.json)
    pub fn settings_path(&self) -> PathBuf {
        settings_path(&self.project_root)
    }

    /// Get the settings backup path (<root>/.vscode/settings.backup.prettier.json)
    pub fn backup_path(&self) -> PathBuf {
        backup_path(&self.project_root)
    }
}

pub fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE)
}

pub fn backup_path(root: &Path) -> PathBuf {
    root.join(BACKUP_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_root() {
        let config = Config::new("/work/app");
        assert_eq!(
            config.settings_path(),
            PathBuf::from("/work/app/.vscode/settings.json")
        );
        assert_eq!(
            config.backup_path(),
            PathBuf::from("/work/app/.vscode/settings.backup.prettier.json")
        );
        assert_eq!(
            config.managed_path(".prettierrc"),
            PathBuf::from("/work/app/.prettierrc")
        );
    }

    #[test]
    fn test_new_defaults() {
        let config = Config::new("/work/app");
        assert_eq!(config.templates, TemplateSource::Embedded);
        assert_eq!(config.package, "prettier");
    }
}
