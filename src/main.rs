//! create-prettier-config: scaffold Prettier config files into the current project

use anyhow::{Context, Result};
use clap::Parser;

use create_prettier_config::commands::{install, revert};
use create_prettier_config::config::Config;
use create_prettier_config::package_manager::Npm;
use create_prettier_config::prompt::StdinPrompt;

#[derive(Parser)]
#[command(name = "create-prettier-config")]
#[command(about = "Set up Prettier config files in the current project", long_about = None)]
#[command(version)]
struct Cli {
    /// Remove the config files and restore the previous editor settings
    #[arg(long)]
    revert: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = std::env::current_dir().context("Failed to get current directory")?;
    let config = Config::from_env(project_root);
    let npm = Npm::new(&config.project_root);

    if cli.revert {
        // Cancelling at the prompt is a normal exit
        revert::execute(&config, &npm, &mut StdinPrompt).context("Revert failed")?;
    } else {
        install::execute(&config, &npm).context("Setup failed")?;
    }

    Ok(())
}
