use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lingorc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locale used as the completeness baseline and merge fallback.
    /// No default: when absent (and not supplied on the command line) the
    /// build step is disabled entirely.
    #[serde(default)]
    pub default_locale: Option<String>,
    #[serde(default = "default_translations_root")]
    pub translations_root: String,
    #[serde(default = "default_dest_dir")]
    pub dest_dir: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_translations_root() -> String {
    "./translations".to_string()
}

fn default_dest_dir() -> String {
    "./dist".to_string()
}

fn default_output_path() -> String {
    "translations".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: None,
            translations_root: default_translations_root(),
            dest_dir: default_dest_dir(),
            output_path: default_output_path(),
        }
    }
}

/// Config written by `lingo init`. Seeds a default locale so a fresh
/// project builds out of the box.
pub fn default_config_json() -> Result<String> {
    let config = Config {
        default_locale: Some("en-us".to_string()),
        ..Default::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
