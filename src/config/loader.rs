use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use crate::config::defaults;
use crate::config::types::ThemeOptions;
use crate::config::validation;
use crate::utils::error::ThemeError;

/// Option file names looked up in the source directory when none are given
const CONFIG_FILES: [&str; 4] = ["_theme.yml", "_theme.yaml", "_theme.toml", "_theme.json"];

/// Load theme options from option files, merged in order over the defaults
pub fn load_theme_options<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> Result<ThemeOptions, ThemeError> {
    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&source_dir),
    };

    let mut merged = defaults::default_theme_options();
    if config_paths.is_empty() {
        debug!("No theme option files found, using defaults");
    }
    for path in &config_paths {
        debug!("Loading theme options from {}", path.display());
        let document = parse_options_file(path)?;
        defaults::merge_values(&mut merged, &document);
    }

    let options = ThemeOptions::from_value(merged)?;
    validation::validate_options(&options)?;

    debug!("Theme options loaded: {:?}", options);
    Ok(options)
}

/// Find default option files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Parse one option file into a generic document
pub fn parse_options_file(path: &Path) -> Result<Value, ThemeError> {
    if !path.exists() {
        return Err(ThemeError::Config(format!(
            "Theme option file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ThemeError::Config(format!("Failed to read theme option file {}: {}", path.display(), e))
    })?;

    if content.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let document: Value = match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| {
            ThemeError::Config(format!("Failed to parse YAML options ({}): {}", path.display(), e))
        })?,
        "toml" => toml::from_str(&content).map_err(|e| {
            ThemeError::Config(format!("Failed to parse TOML options ({}): {}", path.display(), e))
        })?,
        "json" => serde_json::from_str(&content).map_err(|e| {
            ThemeError::Config(format!("Failed to parse JSON options ({}): {}", path.display(), e))
        })?,
        other => {
            return Err(ThemeError::Config(format!(
                "Unsupported theme option file format: {}",
                other
            )));
        }
    };

    // A YAML file holding only comments parses as null
    match document {
        Value::Null => Ok(Value::Object(serde_json::Map::new())),
        Value::Object(_) => Ok(document),
        _ => Err(ThemeError::Config(format!(
            "Theme options in {} must be a mapping",
            path.display()
        ))),
    }
}
