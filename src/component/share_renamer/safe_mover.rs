//! 安全移動模組
//!
//! 目標已存在時拒絕移動；模擬模式下完全不動檔案系統

use super::move_log::MoveLog;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 移動失敗（對整批作業而言是致命錯誤）
#[derive(Debug, Error)]
pub enum MoveError {
    #[error("Can't move {} to {}: target file already exists", .from.display(), .to.display())]
    TargetExists { from: PathBuf, to: PathBuf },
    #[error("Can't move {} to {}: {cause}", .from.display(), .to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        cause: io::Error,
    },
}

/// 實際執行檔案操作的後端
pub trait MoveBackend {
    fn exists(&self, path: &Path) -> bool;
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// 本機檔案系統後端
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMoveBackend;

impl FsMoveBackend {
    /// 複製檔案後刪除原檔案
    fn copy_and_delete(from: &Path, to: &Path) -> io::Result<()> {
        Self::copy_and_delete_with(from, to, |from, to| fs::copy(from, to))
    }

    /// 任一步驟失敗都移除目標檔，避免留下不完整的複本
    fn copy_and_delete_with<C>(from: &Path, to: &Path, copy: C) -> io::Result<()>
    where
        C: FnOnce(&Path, &Path) -> io::Result<u64>,
    {
        if let Err(e) = copy(from, to) {
            let _ = fs::remove_file(to);
            return Err(e);
        }
        if let Err(e) = fs::remove_file(from) {
            let _ = fs::remove_file(to);
            return Err(e);
        }
        Ok(())
    }
}

impl MoveBackend for FsMoveBackend {
    fn exists(&self, path: &Path) -> bool {
        // 無法確認時當作已存在
        path.try_exists().unwrap_or(true)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                debug!(
                    "跨檔案系統移動，改用複製後刪除: {} -> {}",
                    from.display(),
                    to.display()
                );
                Self::copy_and_delete(from, to)
            }
            Err(e) => Err(e),
        }
    }
}

/// 安全移動器
pub struct SafeMover<B: MoveBackend = FsMoveBackend> {
    backend: B,
}

impl Default for SafeMover<FsMoveBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl SafeMover<FsMoveBackend> {
    pub const fn new() -> Self {
        Self {
            backend: FsMoveBackend,
        }
    }
}

impl<B: MoveBackend> SafeMover<B> {
    pub const fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// 移動（或模擬移動）單一檔案，結果寫入 `log`
    ///
    /// # Errors
    /// 目標已存在或移動失敗時回傳 `MoveError`，呼叫端應停止整批作業
    pub fn move_file(
        &self,
        from: &Path,
        to: &Path,
        simulate: bool,
        log: &mut MoveLog,
    ) -> Result<(), MoveError> {
        if self.backend.exists(to) {
            let err = MoveError::TargetExists {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            };
            log.push_warning(err.to_string());
            return Err(err);
        }

        if simulate {
            log.push(format!(
                "[Simulated] Moved {} -> {}",
                from.display(),
                to.display()
            ));
            return Ok(());
        }

        if let Err(cause) = self.backend.rename(from, to) {
            let err = MoveError::Io {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                cause,
            };
            log.push_warning(err.to_string());
            return Err(err);
        }

        log.push(format!("Moved {} -> {}", from.display(), to.display()));
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryBackend;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_move_success() {
        let mover = SafeMover::with_backend(MemoryBackend::with_files(["/in/a.mp4"]));
        let mut log = MoveLog::new();

        let result = mover.move_file(Path::new("/in/a.mp4"), Path::new("/out/b.mp4"), false, &mut log);

        assert!(result.is_ok());
        assert_eq!(mover.backend().rename_count(), 1);
        assert_eq!(log.lines(), ["Moved /in/a.mp4 -> /out/b.mp4"]);
    }

    #[test]
    fn test_simulate_never_mutates() {
        let mover = SafeMover::with_backend(MemoryBackend::with_files(["/in/a.mp4"]));
        let mut log = MoveLog::new();

        let result = mover.move_file(Path::new("/in/a.mp4"), Path::new("/out/b.mp4"), true, &mut log);

        assert!(result.is_ok());
        assert_eq!(mover.backend().rename_count(), 0);
        assert_eq!(log.lines(), ["[Simulated] Moved /in/a.mp4 -> /out/b.mp4"]);
    }

    #[test]
    fn test_target_exists_is_critical() {
        let mover =
            SafeMover::with_backend(MemoryBackend::with_files(["/in/a.mp4", "/out/b.mp4"]));
        let mut log = MoveLog::new();

        let result = mover.move_file(Path::new("/in/a.mp4"), Path::new("/out/b.mp4"), false, &mut log);

        assert!(matches!(result, Err(MoveError::TargetExists { .. })));
        assert_eq!(mover.backend().rename_count(), 0);
        assert_eq!(
            log.lines(),
            ["Can't move /in/a.mp4 to /out/b.mp4: target file already exists"]
        );
    }

    #[test]
    fn test_target_exists_in_simulate_mode() {
        let mover =
            SafeMover::with_backend(MemoryBackend::with_files(["/in/a.mp4", "/out/b.mp4"]));
        let mut log = MoveLog::new();

        let result = mover.move_file(Path::new("/in/a.mp4"), Path::new("/out/b.mp4"), true, &mut log);

        assert!(matches!(result, Err(MoveError::TargetExists { .. })));
        assert_eq!(mover.backend().rename_count(), 0);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_io_failure_is_critical() {
        let backend = MemoryBackend {
            fail_with: Some(io::ErrorKind::PermissionDenied),
            ..MemoryBackend::with_files(["/in/a.mp4"])
        };
        let mover = SafeMover::with_backend(backend);
        let mut log = MoveLog::new();

        let result = mover.move_file(Path::new("/in/a.mp4"), Path::new("/out/b.mp4"), false, &mut log);

        assert!(matches!(result, Err(MoveError::Io { .. })));
        assert_eq!(
            log.lines(),
            ["Can't move /in/a.mp4 to /out/b.mp4: simulated failure"]
        );
    }

    #[test]
    fn test_fs_backend_moves_file() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("a.mp4");
        let to = temp_dir.path().join("b.mp4");
        fs::write(&from, "video").unwrap();

        let mut log = MoveLog::new();
        SafeMover::new().move_file(&from, &to, false, &mut log).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "video");
    }

    #[test]
    fn test_fs_backend_keeps_existing_target() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("a.mp4");
        let to = temp_dir.path().join("b.mp4");
        fs::write(&from, "new").unwrap();
        fs::write(&to, "old").unwrap();

        let mut log = MoveLog::new();
        let result = SafeMover::new().move_file(&from, &to, false, &mut log);

        assert!(result.is_err());
        assert!(from.exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "old");
    }

    #[test]
    fn test_copy_and_delete_moves_file() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("a.mp4");
        let to = temp_dir.path().join("b.mp4");
        fs::write(&from, "video").unwrap();

        FsMoveBackend::copy_and_delete(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "video");
    }

    #[test]
    fn test_failed_copy_leaves_no_partial_target() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("a.mp4");
        let to = temp_dir.path().join("b.mp4");
        fs::write(&from, "video").unwrap();

        // 模擬磁碟已滿：寫了一半就失敗
        let result = FsMoveBackend::copy_and_delete_with(&from, &to, |_, to| {
            fs::write(to, "vi")?;
            Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"))
        });

        assert!(result.is_err());
        assert!(from.exists());
        assert!(!to.exists());

        // 下一次執行不會誤判為目標已存在
        let mut log = MoveLog::new();
        SafeMover::new().move_file(&from, &to, false, &mut log).unwrap();
        assert_eq!(fs::read_to_string(&to).unwrap(), "video");
    }

    #[test]
    fn test_fs_backend_missing_target_dir() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("a.mp4");
        let to = temp_dir.path().join("missing").join("b.mp4");
        fs::write(&from, "video").unwrap();

        let mut log = MoveLog::new();
        let result = SafeMover::new().move_file(&from, &to, false, &mut log);

        assert!(matches!(result, Err(MoveError::Io { .. })));
        assert!(from.exists());
    }
}
