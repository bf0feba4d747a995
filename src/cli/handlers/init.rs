use crate::config::{BookqlConfig, CONFIG_FILE_NAME};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    BookqlConfig::default().save(&config_path)?;

    println!(
        "{} bookql config in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());

    Ok(())
}
