use crate::config::types::{Config, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// 設定檔位置（目前工作目錄）
pub const SETTINGS_FILE: &str = "settings.json";

impl Config {
    pub fn new() -> Result<Self> {
        let settings = load_settings(Path::new(SETTINGS_FILE)).unwrap_or_else(|e| {
            warn!("{e:#}");
            UserSettings::default()
        });

        Ok(Self { settings })
    }
}

/// 讀取設定檔；檔案不存在時回傳預設值
pub fn load_settings(path: &Path) -> Result<UserSettings> {
    if !path.exists() {
        return Ok(UserSettings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings from {}", path.display()))
}
