//! 檔案內容驗證模組
//!
//! Share 錄影在檔案最後 47 bytes 寫入固定的 `EncodedBy` 標籤，
//! 比對這段簽章即可確認檔案確實由該編碼器產生。

use log::debug;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// 簽章長度（bytes）
pub const SIGNATURE_LEN: usize = 47;

/// 檔案尾端的編碼器簽章：`EncodedBy` 標頭加上 UTF-16 的 "GeForce SHARE"
pub const ENCODER_SIGNATURE: &[u8; SIGNATURE_LEN] = b"EncodedBy\x00\x00\x00\x01\x00\x00\x00\"\x00\x08G\x00e\x00F\x00o\x00r\x00c\x00e\x00 \x00S\x00H\x00A\x00R\x00E\x00\x00\x00";

/// 內容驗證介面，方便測試時替換成假的實作
pub trait ContentValidator {
    /// 檔案是否通過驗證；任何讀取錯誤都視為不通過
    fn is_valid(&self, path: &Path) -> bool;
}

impl<F> ContentValidator for F
where
    F: Fn(&Path) -> bool,
{
    fn is_valid(&self, path: &Path) -> bool {
        self(path)
    }
}

/// 比對檔案尾端簽章的驗證器
#[derive(Debug, Clone, Copy, Default)]
pub struct EncoderSignatureValidator;

impl EncoderSignatureValidator {
    pub const fn new() -> Self {
        Self
    }

    fn read_trailer(path: &Path) -> std::io::Result<Option<[u8; SIGNATURE_LEN]>> {
        let mut file = File::open(path)?;
        if file.metadata()?.len() < SIGNATURE_LEN as u64 {
            return Ok(None);
        }

        file.seek(SeekFrom::End(-(SIGNATURE_LEN as i64)))?;
        let mut trailer = [0u8; SIGNATURE_LEN];
        file.read_exact(&mut trailer)?;
        Ok(Some(trailer))
    }
}

impl ContentValidator for EncoderSignatureValidator {
    fn is_valid(&self, path: &Path) -> bool {
        match Self::read_trailer(path) {
            Ok(Some(trailer)) => &trailer == ENCODER_SIGNATURE,
            Ok(None) => {
                debug!("檔案太短，無法驗證: {}", path.display());
                false
            }
            Err(e) => {
                debug!("讀取檔案尾端失敗 {}: {e}", path.display());
                false
            }
        }
    }
}
