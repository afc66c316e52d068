//! Package manager boundary
//!
//! Installs and uninstalls the formatter dependency. Only success or failure
//! is observed; the tool's own output streams straight to the terminal.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Something that can add or remove a project dependency
pub trait PackageManager {
    /// Install `name` as a development dependency
    fn install_dev(&self, name: &str) -> Result<()>;

    /// Remove `name` from the project
    fn uninstall(&self, name: &str) -> Result<()>;
}

/// `npm`, run through the system shell in the project root
#[derive(Debug, Clone)]
pub struct Npm {
    working_dir: PathBuf,
}

impl Npm {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Command line used to install `name`
    pub fn install_command(name: &str) -> String {
        format!("npm install --save-dev {}", name)
    }

    /// Command line used to uninstall `name`
    pub fn uninstall_command(name: &str) -> String {
        format!("npm uninstall {}", name)
    }

    fn run(&self, cmd_str: &str) -> Result<()> {
        run_inherited(cmd_str, &self.working_dir)
    }
}

impl PackageManager for Npm {
    fn install_dev(&self, name: &str) -> Result<()> {
        self.run(&Self::install_command(name))
    }

    fn uninstall(&self, name: &str) -> Result<()> {
        self.run(&Self::uninstall_command(name))
    }
}

/// Build a shell [`Command`] for `cmd_str`
///
/// `npm` is a batch script on Windows, so it is always started via the shell.
fn shell_command(cmd_str: &str) -> Command {
    #[cfg(windows)]
    {
        let mut c = Command::new("cmd");
        c.args(["/C", cmd_str]);
        c
    }
    #[cfg(not(windows))]
    {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd_str);
        c
    }
}

/// Run `cmd_str` synchronously with inherited stdio
fn run_inherited(cmd_str: &str, working_dir: &Path) -> Result<()> {
    let status = shell_command(cmd_str)
        .current_dir(working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|_| Error::ExternalTool {
            command: cmd_str.to_string(),
            exit_code: None,
        })?;

    if !status.success() {
        return Err(Error::ExternalTool {
            command: cmd_str.to_string(),
            exit_code: status.code(),
        });
    }

    Ok(())
}
