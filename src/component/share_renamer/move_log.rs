//! 處理紀錄
//!
//! 每次執行流程都會建立新的紀錄並回傳給呼叫端，不保留任何全域狀態

use log::{Level, log};

/// 一般訊息的日誌等級
pub const ENTRY_LEVEL: Level = Level::Debug;

/// 錯誤或略過訊息的日誌等級
///
/// 介面本身會印出紀錄，因此低於預設的 `warn` 過濾等級，只在 `RUST_LOG` 開啟時寫入日誌
pub const WARNING_LEVEL: Level = Level::Info;

/// 依序累積的處理結果訊息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    lines: Vec<String>,
}

impl MoveLog {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// 一般訊息
    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        log!(ENTRY_LEVEL, "{line}");
        self.lines.push(line);
    }

    /// 錯誤或略過的訊息
    pub fn push_warning(&mut self, line: impl Into<String>) {
        let line = line.into();
        log!(WARNING_LEVEL, "{line}");
        self.lines.push(line);
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
