use anyhow::{Result, bail};
use std::path::Path;

/// 確認路徑存在且為資料夾
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        bail!("路徑不可為空");
    }
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}
