use crate::config::{Config, TrackerSettings};
use crate::error::JobtrailError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(path: String) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(".jobtrail.yml");

    if config_path.exists() {
        return Err(JobtrailError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = Config {
        tracker: TrackerSettings { path: path.clone() },
        ..Default::default()
    };

    // Create data directory
    let data_path = cwd.join(&path);
    std::fs::create_dir_all(&data_path)?;

    // Save config
    config.save(&config_path)?;

    println!(
        "{} jobtrail project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
