//! 檔名比對模組
//!
//! 辨識 Share 錄影工具產生的檔名格式：
//! `<App 名稱> <YYYY>.<MM>.<DD> - <HH>.<MM>.<SS>.<編號>[.DVR].mp4`

use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;

/// 錄影檔的副檔名
pub const CAPTURE_EXTENSION: &str = "mp4";

static REGEX_SHARE_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(.*) ([0-9]+)\.([0-9]+)\.([0-9]+) - ([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)(\.DVR)?\.mp4$",
    )
    .expect("Invalid regex")
});

/// 從檔名取出的原始欄位，全部保持原本的字串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCaptureFields<'a> {
    pub app_name: &'a str,
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
    pub hour: &'a str,
    pub minute: &'a str,
    pub second: &'a str,
    pub index: &'a str,
    pub has_dvr_marker: bool,
}

/// 檔名比對器
pub struct FilenameMatcher {
    regex: &'static Regex,
}

impl Default for FilenameMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FilenameMatcher {
    pub fn new() -> Self {
        Self {
            regex: &REGEX_SHARE_FILENAME,
        }
    }

    /// 檔名（不含路徑）是否完全符合格式
    #[must_use]
    pub fn is_match(&self, filename: &str) -> bool {
        self.regex.is_match(filename)
    }

    /// 檢查路徑的檔名部分
    #[must_use]
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.is_match(name))
    }

    /// 取出原始欄位，不符合格式時回傳 `None`
    pub fn capture<'a>(&self, filename: &'a str) -> Option<RawCaptureFields<'a>> {
        let caps = self.regex.captures(filename)?;
        Some(Self::fields_from(&caps))
    }

    fn fields_from<'a>(caps: &Captures<'a>) -> RawCaptureFields<'a> {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        RawCaptureFields {
            app_name: group(1),
            year: group(2),
            month: group(3),
            day: group(4),
            hour: group(5),
            minute: group(6),
            second: group(7),
            index: group(8),
            has_dvr_marker: caps.get(9).is_some(),
        }
    }
}
