use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command: write a default configuration file.
pub fn handle(config_path: &Path, force: bool) -> AppResult<()> {
    if config_path.exists() && !force {
        warning(format!(
            "Configuration already exists: {} (use --force to overwrite)",
            config_path.display()
        ));
        return Ok(());
    }

    Config::default()
        .save_to(config_path)
        .map_err(|_| AppError::ConfigSave)?;

    success(format!("Config file: {}", config_path.display()));
    Ok(())
}
