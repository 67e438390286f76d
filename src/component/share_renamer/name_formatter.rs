//! 輸出檔名樣板模組
//!
//! 樣板由一般文字與 `{別名}` 組成，別名只接受固定的對照表，
//! 打錯的別名會直接回報錯誤，而不是默默輸出空字串。
//! `{{` 與 `}}` 代表字面上的大括號。

use super::capture_record::CaptureRecord;
use thiserror::Error;

/// 樣板可用的欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateField {
    AppName,
    Date,
    Time,
    Year,
    ShortYear,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Index,
    OriginalName,
    DvrLabel,
}

/// 別名 → 欄位對照表
pub const FIELD_ALIASES: &[(&str, TemplateField)] = &[
    ("app", TemplateField::AppName),
    ("game", TemplateField::AppName),
    ("date", TemplateField::Date),
    ("time", TemplateField::Time),
    ("y", TemplateField::Year),
    ("year", TemplateField::Year),
    ("sy", TemplateField::ShortYear),
    ("shortyear", TemplateField::ShortYear),
    ("m", TemplateField::Month),
    ("month", TemplateField::Month),
    ("mo", TemplateField::Month),
    ("d", TemplateField::Day),
    ("day", TemplateField::Day),
    ("h", TemplateField::Hour),
    ("hour", TemplateField::Hour),
    ("min", TemplateField::Minute),
    ("minute", TemplateField::Minute),
    ("s", TemplateField::Second),
    ("second", TemplateField::Second),
    ("i", TemplateField::Index),
    ("index", TemplateField::Index),
    ("original", TemplateField::OriginalName),
    ("orig", TemplateField::OriginalName),
    ("dvr", TemplateField::DvrLabel),
];

/// 樣板別名說明，給介面顯示用
pub const TOKEN_HELP: &str = "\
                {app} - Application/Game name
               {date} - Date, formatted with dashes
               {time} - Time, formatted with dashes
     {sy}/{shortyear} - Year, last two digits
           {y}/{year} - Year
          {m}/{month} - Month
            {d}/{day} - Day
           {h}/{hour} - Hour (24h)
       {min}/{minute} - Minute
         {s}/{second} - Second
          {i}/{index} - Index number set by the capture tool after the date and time
    {orig}/{original} - Original filename (without path)
                {dvr} - Only present if recording is DVR";

impl TemplateField {
    /// 查詢別名，不在表中的回傳 `None`
    #[must_use]
    pub fn from_alias(alias: &str) -> Option<Self> {
        FIELD_ALIASES
            .iter()
            .find(|(name, _)| *name == alias)
            .map(|(_, field)| *field)
    }

    /// 從紀錄取出欄位值
    #[must_use]
    pub fn resolve(self, record: &CaptureRecord) -> String {
        match self {
            Self::AppName => record.app_name.clone(),
            Self::Date => record.date(),
            Self::Time => record.time(),
            Self::Year => record.year.clone(),
            Self::ShortYear => record.short_year.clone(),
            Self::Month => record.month.clone(),
            Self::Day => record.day.clone(),
            Self::Hour => record.hour.clone(),
            Self::Minute => record.minute.clone(),
            Self::Second => record.second.clone(),
            Self::Index => record.index.clone(),
            Self::OriginalName => record.original_name.clone(),
            Self::DvrLabel => record.dvr_label.clone(),
        }
    }
}

/// 樣板錯誤
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown placeholder `{{{0}}}` in template")]
    UnknownPlaceholder(String),
    #[error("unclosed `{{` at position {0} in template")]
    UnclosedBrace(usize),
    #[error("single `}}` at position {0} in template (use `}}}}` for a literal brace)")]
    UnmatchedClosingBrace(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TemplatePart {
    Literal(String),
    Field(TemplateField),
}

/// 解析過的檔名樣板
///
/// 建立時即檢查所有別名，之後的 `render` 不會失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    parts: Vec<TemplatePart>,
}

impl NameTemplate {
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(FormatError::UnclosedBrace(pos));
                    }

                    let field = TemplateField::from_alias(&name)
                        .ok_or(FormatError::UnknownPlaceholder(name))?;
                    if !literal.is_empty() {
                        parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(TemplatePart::Field(field));
                }
                '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(FormatError::UnmatchedClosingBrace(pos)),
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            parts.push(TemplatePart::Literal(literal));
        }

        Ok(Self { parts })
    }

    /// 套用紀錄產生檔名（不含目錄，也不自動加副檔名）
    #[must_use]
    pub fn render(&self, record: &CaptureRecord) -> String {
        self.parts
            .iter()
            .map(|part| match part {
                TemplatePart::Literal(text) => text.clone(),
                TemplatePart::Field(field) => field.resolve(record),
            })
            .collect()
    }
}
