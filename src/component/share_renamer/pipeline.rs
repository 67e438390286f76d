//! 整理流程
//!
//! 掃描 → 解析 → 驗證把關 → 產生檔名 → 選擇目錄 → 移動，一次處理一個檔案。
//! 任何移動失敗都會立即停止整批作業，已移動的檔案不會復原。

use super::capture_record::{CaptureRecord, MetadataExtractor};
use super::content_validator::{ContentValidator, EncoderSignatureValidator};
use super::filename_matcher::{CAPTURE_EXTENSION, FilenameMatcher};
use super::move_log::MoveLog;
use super::name_formatter::NameTemplate;
use super::options::RenameOptions;
use super::safe_mover::{FsMoveBackend, MoveBackend, SafeMover};
use crate::tools::scan_capture_files;
use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

pub const MSG_CRITICAL_EXIT: &str = "Exiting due to critical error";
pub const MSG_SIMULATED: &str = "Simulated successfully!";
pub const MSG_COMPLETED: &str = "Completed successfully!";

/// 找出輸入目錄中所有符合命名格式的錄影檔
///
/// 不符合格式的檔案直接略過，不視為錯誤
pub fn discover_captures(input_path: &Path) -> Result<Vec<PathBuf>> {
    let matcher = FilenameMatcher::new();
    let candidates = scan_capture_files(input_path, CAPTURE_EXTENSION)?;

    let captures: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|path| {
            let matched = matcher.matches_path(path);
            if !matched {
                debug!("略過不符合格式的檔案: {}", path.display());
            }
            matched
        })
        .collect();

    Ok(captures)
}

/// 整理流程
pub struct Pipeline<'a, V = EncoderSignatureValidator, B = FsMoveBackend>
where
    V: ContentValidator,
    B: MoveBackend,
{
    options: &'a RenameOptions,
    template: NameTemplate,
    validator: V,
    mover: SafeMover<B>,
}

impl<'a> Pipeline<'a> {
    /// 使用真實的簽章驗證與檔案系統
    ///
    /// # Errors
    /// 樣板含有未知別名或大括號不成對時回傳錯誤，此時不會動到任何檔案
    pub fn new(options: &'a RenameOptions) -> Result<Self> {
        Self::with_parts(options, EncoderSignatureValidator::new(), SafeMover::new())
    }
}

impl<'a, V, B> Pipeline<'a, V, B>
where
    V: ContentValidator,
    B: MoveBackend,
{
    pub fn with_parts(options: &'a RenameOptions, validator: V, mover: SafeMover<B>) -> Result<Self> {
        let template = NameTemplate::parse(&options.template)?;
        Ok(Self {
            options,
            template,
            validator,
            mover,
        })
    }

    pub const fn mover(&self) -> &SafeMover<B> {
        &self.mover
    }

    /// 驗證把關：停用驗證時一律通過，否則必須驗證成功
    fn passes_validity_gate(&self, record: &CaptureRecord) -> bool {
        if self.options.validate {
            record.is_valid
        } else {
            true
        }
    }

    fn destination_for(&self, record: &CaptureRecord) -> PathBuf {
        self.options
            .output_dir_for(record.is_dvr)
            .join(self.template.render(record))
    }

    /// 掃描輸入目錄並處理所有錄影檔
    pub fn run(&self) -> Result<MoveLog> {
        let files = discover_captures(&self.options.input_path)?;
        info!(
            "找到 {} 個錄影檔: {}",
            files.len(),
            self.options.input_path.display()
        );
        Ok(self.run_files(&files))
    }

    /// 依序處理指定的檔案，回傳本次的處理紀錄
    pub fn run_files(&self, files: &[PathBuf]) -> MoveLog {
        let mut log = MoveLog::new();
        let extractor = MetadataExtractor::new(self.options, &self.validator);
        let simulate = self.options.simulate;

        for path in files {
            let Some(record) = extractor.extract(path) else {
                debug!("略過無法解析的檔案: {}", path.display());
                continue;
            };

            if !self.passes_validity_gate(&record) {
                log.push_warning(format!(
                    "Skipping {} because it failed to validate (disable validation to move anyway)",
                    record.original_name
                ));
                continue;
            }

            let destination = self.destination_for(&record);
            if self
                .mover
                .move_file(path, &destination, simulate, &mut log)
                .is_err()
            {
                log.push_warning(MSG_CRITICAL_EXIT);
                return log;
            }
        }

        log.push(if simulate { MSG_SIMULATED } else { MSG_COMPLETED });
        log
    }
}

/// 以預設的驗證器與檔案系統執行一次完整流程
///
/// # Errors
/// 樣板錯誤（`FormatError`）會在掃描前回傳
pub fn process(options: &RenameOptions) -> Result<MoveLog> {
    Pipeline::new(options)?.run()
}
