//! Share 錄影整理元件
//!
//! 依錄影工具的檔名格式解析錄影檔，套用檔名樣板後移動到輸出目錄，
//! DVR 與一般錄影可分別指定目錄

mod capture_record;
mod content_validator;
mod filename_matcher;
mod main;
mod move_log;
mod name_formatter;
mod options;
mod pipeline;
mod safe_mover;

pub use capture_record::{CaptureRecord, MetadataExtractor};
pub use content_validator::{
    ContentValidator, ENCODER_SIGNATURE, EncoderSignatureValidator, SIGNATURE_LEN,
};
pub use filename_matcher::{CAPTURE_EXTENSION, FilenameMatcher, RawCaptureFields};
pub use main::ShareRenamer;
pub use move_log::MoveLog;
pub use name_formatter::{
    FIELD_ALIASES, FormatError, NameTemplate, TOKEN_HELP, TemplateField,
};
pub use options::{DEFAULT_DVR_LABEL, DEFAULT_SPACE_CHAR, DEFAULT_TEMPLATE, RenameOptions};
pub use pipeline::{
    MSG_COMPLETED, MSG_CRITICAL_EXIT, MSG_SIMULATED, Pipeline, discover_captures, process,
};
pub use safe_mover::{FsMoveBackend, MoveBackend, MoveError, SafeMover};
