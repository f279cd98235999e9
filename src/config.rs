use crate::error::{Result, RiskcheckError};
use crate::types::config::RiskcheckConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "riskcheck.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".riskcheck/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/riskcheck/config.toml";

/// Loads the layered configuration rooted at `root` (usually the current
/// directory). Returns None when no repo-level file exists; the global and
/// local layers only apply on top of one.
pub fn load_config(root: &Path) -> Result<Option<RiskcheckConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<RiskcheckConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: RiskcheckConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RiskcheckError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    debug!(path = %repo_path.display(), "configuration loaded");
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RiskcheckError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
