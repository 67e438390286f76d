use crate::component::share_renamer::{
    DEFAULT_DVR_LABEL, DEFAULT_SPACE_CHAR, DEFAULT_TEMPLATE, RenameOptions,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 最近使用路徑的保留數量
pub const MAX_RECENT_PATHS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::ZhTw => write!(f, "繁體中文"),
        }
    }
}

/// 上次使用的整理參數，下次執行時當作預設值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameDefaults {
    pub template: String,
    pub dvr_label: String,
    pub space_char: String,
    pub validate: bool,
}

impl Default for RenameDefaults {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            dvr_label: DEFAULT_DVR_LABEL.to_string(),
            space_char: DEFAULT_SPACE_CHAR.to_string(),
            validate: true,
        }
    }
}

impl RenameDefaults {
    /// 記住這次的參數（路徑與模擬模式不保存）
    pub fn remember(&mut self, options: &RenameOptions) {
        self.template.clone_from(&options.template);
        self.dvr_label.clone_from(&options.dvr_label);
        self.space_char.clone_from(&options.space_char);
        self.validate = options.validate;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    /// 最近使用的輸入路徑，最新的在前
    pub recent_paths: Vec<String>,
    pub rename: RenameDefaults,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}
