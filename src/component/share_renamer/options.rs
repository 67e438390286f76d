//! 整理流程的執行選項

use std::path::PathBuf;

/// 預設的輸出檔名樣板
pub const DEFAULT_TEMPLATE: &str = "{date}.{time}.{app}.mp4";

/// 預設的 `{dvr}` 文字
pub const DEFAULT_DVR_LABEL: &str = "DVR";

/// 預設的空白替代字元（即不替換）
pub const DEFAULT_SPACE_CHAR: &str = " ";

/// 一次整理作業所需的完整設定，由外層介面填好後交給流程
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// 錄影根目錄（底下每個子資料夾對應一個遊戲）
    pub input_path: PathBuf,
    /// 預設輸出目錄
    pub target_path: PathBuf,
    /// DVR 錄影的輸出目錄
    pub dvr_path: Option<PathBuf>,
    /// 非 DVR 錄影的輸出目錄
    pub nodvr_path: Option<PathBuf>,
    /// 輸出檔名樣板
    pub template: String,
    pub dvr_label: String,
    /// App 名稱中空白要替換成的字串
    pub space_char: String,
    /// 是否檢查檔案尾端的編碼器簽章
    pub validate: bool,
    /// 只模擬，不實際移動
    pub simulate: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            target_path: PathBuf::new(),
            dvr_path: None,
            nodvr_path: None,
            template: DEFAULT_TEMPLATE.to_string(),
            dvr_label: DEFAULT_DVR_LABEL.to_string(),
            space_char: DEFAULT_SPACE_CHAR.to_string(),
            validate: true,
            simulate: false,
        }
    }
}

impl RenameOptions {
    #[must_use]
    pub fn new(input_path: impl Into<PathBuf>, target_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            target_path: target_path.into(),
            ..Self::default()
        }
    }

    /// 依 DVR 標記選擇輸出目錄
    ///
    /// 優先順序：DVR 專用目錄 → 非 DVR 專用目錄 → 預設目錄
    #[must_use]
    pub fn output_dir_for(&self, is_dvr: bool) -> &PathBuf {
        match (is_dvr, &self.dvr_path, &self.nodvr_path) {
            (true, Some(dvr_path), _) => dvr_path,
            (false, _, Some(nodvr_path)) => nodvr_path,
            _ => &self.target_path,
        }
    }
}
