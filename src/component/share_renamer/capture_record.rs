//! 錄影資訊擷取模組
//!
//! 將比對到的檔名欄位轉成 `CaptureRecord`，並依設定決定是否驗證檔案內容

use super::content_validator::ContentValidator;
use super::filename_matcher::{FilenameMatcher, RawCaptureFields};
use super::options::RenameOptions;
use log::debug;
use std::path::Path;

/// 一個錄影檔的中繼資料
///
/// 數字欄位保留原檔名中的寫法（例如 `"09"` 不會變成 `"9"`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRecord {
    /// App／遊戲名稱（空白已依設定替換）
    pub app_name: String,
    pub year: String,
    /// 年份末兩位
    pub short_year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
    /// 錄影工具指派的編號，不同日期之間可能重複
    pub index: String,
    pub is_dvr: bool,
    /// `is_dvr` 時為設定的 DVR 文字，否則為空字串
    pub dvr_label: String,
    /// 只有在要求驗證且驗證成功時才為 true
    pub is_valid: bool,
    /// 原始檔名（不含路徑）
    pub original_name: String,
}

impl CaptureRecord {
    /// 從檔名建立紀錄，不碰檔案內容（`is_valid` 一律為 false）
    ///
    /// 檔名不符合格式時回傳 `None`
    #[must_use]
    pub fn from_filename(filename: &str, options: &RenameOptions) -> Option<Self> {
        let fields = FilenameMatcher::new().capture(filename)?;
        Some(Self::from_fields(&fields, filename, options))
    }

    fn from_fields(fields: &RawCaptureFields<'_>, filename: &str, options: &RenameOptions) -> Self {
        let short_year_start = fields.year.len().saturating_sub(2);
        let dvr_label = if fields.has_dvr_marker {
            options.dvr_label.clone()
        } else {
            String::new()
        };

        Self {
            app_name: fields.app_name.replace(' ', &options.space_char),
            year: fields.year.to_string(),
            short_year: fields.year[short_year_start..].to_string(),
            month: fields.month.to_string(),
            day: fields.day.to_string(),
            hour: fields.hour.to_string(),
            minute: fields.minute.to_string(),
            second: fields.second.to_string(),
            index: fields.index.to_string(),
            is_dvr: fields.has_dvr_marker,
            dvr_label,
            is_valid: false,
            original_name: filename.to_string(),
        }
    }

    /// `year-month-day`
    #[must_use]
    pub fn date(&self) -> String {
        format!("{}-{}-{}", self.year, self.month, self.day)
    }

    /// `hour-minute-second`
    #[must_use]
    pub fn time(&self) -> String {
        format!("{}-{}-{}", self.hour, self.minute, self.second)
    }
}

/// 擷取器：檔名解析加上選擇性的內容驗證
pub struct MetadataExtractor<'a, V: ContentValidator> {
    matcher: FilenameMatcher,
    options: &'a RenameOptions,
    validator: &'a V,
}

impl<'a, V: ContentValidator> MetadataExtractor<'a, V> {
    pub fn new(options: &'a RenameOptions, validator: &'a V) -> Self {
        Self {
            matcher: FilenameMatcher::new(),
            options,
            validator,
        }
    }

    /// 擷取單一檔案的紀錄
    ///
    /// 只有在設定要求驗證時才會開啟檔案
    pub fn extract(&self, path: &Path) -> Option<CaptureRecord> {
        let filename = path.file_name()?.to_str()?;
        let fields = self.matcher.capture(filename)?;
        let mut record = CaptureRecord::from_fields(&fields, filename, self.options);

        if self.options.validate {
            record.is_valid = self.validator.is_valid(path);
        }

        debug!(
            "解析錄影檔: {} (app={}, dvr={}, valid={})",
            record.original_name, record.app_name, record.is_dvr, record.is_valid
        );

        Some(record)
    }
}
