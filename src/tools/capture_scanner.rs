use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn has_extension(entry: &DirEntry, extension: &str) -> bool {
    entry
        .path()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == extension)
}

/// 掃描 `root/*/*.<extension>`：只看根目錄下一層子資料夾內的檔案
///
/// 隱藏的資料夾與檔案會略過，符號連結會跟隨，結果依路徑排序
pub fn scan_capture_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    // 不設 min_depth：第一層資料夾也要經過 filter_entry 才能排除隱藏資料夾
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .max_depth(2)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.depth() == 2)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_extension(entry, extension))
        .map(DirEntry::into_path)
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_only_second_level() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("GameA/nested")).unwrap();
        fs::create_dir_all(root.join("GameB")).unwrap();
        fs::write(root.join("top.mp4"), "top").unwrap();
        fs::write(root.join("GameA/a.mp4"), "a").unwrap();
        fs::write(root.join("GameA/nested/deep.mp4"), "deep").unwrap();
        fs::write(root.join("GameB/b.mp4"), "b").unwrap();

        let files = scan_capture_files(root, "mp4").unwrap();

        assert_eq!(files, vec![root.join("GameA/a.mp4"), root.join("GameB/b.mp4")]);
    }

    #[test]
    fn test_scan_skips_directories_named_like_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("GameA/folder.mp4")).unwrap();
        fs::write(root.join("GameA/real.mp4"), "real").unwrap();

        let files = scan_capture_files(root, "mp4").unwrap();
        assert_eq!(files, vec![root.join("GameA/real.mp4")]);
    }

    #[test]
    fn test_scan_filters_extension_and_hidden() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("GameA")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("GameA/clip.mkv"), "mkv").unwrap();
        fs::write(root.join("GameA/.clip.mp4"), "hidden").unwrap();
        fs::write(root.join(".hidden/clip.mp4"), "hidden").unwrap();

        let files = scan_capture_files(root, "mp4").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_skips_hidden_game_folder() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join(".Trash")).unwrap();
        fs::create_dir_all(root.join("GameA")).unwrap();
        fs::write(root.join(".Trash/Game 2021.07.04 - 18.30.05.1.mp4"), "old").unwrap();
        fs::write(root.join("GameA/a.mp4"), "a").unwrap();

        let files = scan_capture_files(root, "mp4").unwrap();
        assert_eq!(files, vec![root.join("GameA/a.mp4")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("in");
        let elsewhere = temp_dir.path().join("elsewhere");
        fs::create_dir_all(root.join("GameA")).unwrap();
        fs::create_dir_all(elsewhere.join("GameB")).unwrap();

        fs::write(elsewhere.join("real.mp4"), "a").unwrap();
        symlink(elsewhere.join("real.mp4"), root.join("GameA/linked.mp4")).unwrap();
        fs::write(elsewhere.join("GameB/b.mp4"), "b").unwrap();
        symlink(elsewhere.join("GameB"), root.join("GameB")).unwrap();

        let files = scan_capture_files(&root, "mp4").unwrap();

        assert_eq!(
            files,
            vec![root.join("GameA/linked.mp4"), root.join("GameB/b.mp4")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_dangling_symlink() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("GameA")).unwrap();
        symlink(root.join("gone.mp4"), root.join("GameA/dangling.mp4")).unwrap();

        let files = scan_capture_files(root, "mp4").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let files = scan_capture_files(&temp_dir.path().join("missing"), "mp4").unwrap();
        assert!(files.is_empty());
    }
}
