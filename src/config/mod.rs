use crate::core::images::DEFAULT_EXTENSIONS;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Local folder searched for bay images after any uploaded archives
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,
    /// chrono format used for the "Period analyzed" banner
    #[serde(default = "default_period_format")]
    pub period_format: String,
    #[serde(default)]
    pub show_chart: bool,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_images_dir() -> String {
    "images".to_string()
}
fn default_image_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}
fn default_period_format() -> String {
    "%b %d, %Y".to_string()
}
fn default_chart_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            image_extensions: default_image_extensions(),
            period_format: default_period_format(),
            show_chart: false,
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("resetboard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".resetboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("resetboard.conf")
    }

    /// Load configuration from the default location.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    /// Missing fields take their default values.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write this configuration to `path`, creating parent folders.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// `images_dir` with `~/` expanded.
    pub fn images_path(&self) -> PathBuf {
        expand_tilde(&self.images_dir)
    }
}
