//! 輸出路徑推導與自動重新命名

use std::path::{Path, PathBuf};
use crate::models::format::AudioFormat;

/// 輸出路徑：output_dir / {輸入檔名}.{格式副檔名}
pub fn derive_output_path(input_path: &Path, output_dir: &Path, format: AudioFormat) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());
    output_dir.join(format!("{}.{}", stem, format.extension()))
}

/// 在副檔名前加上遞增的數字後綴（_1、_2 …），從 1 開始逐一檢查，
/// 回傳第一個不存在的路徑。計數沒有上限。
pub fn next_available_name(path: &Path) -> PathBuf {
    next_available_name_with(path, |candidate| candidate.exists())
}

/// 同 [`next_available_name`]，以 `exists` 判斷候選路徑是否已被佔用
pub fn next_available_name_with<F>(path: &Path, exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext = path.extension().map(|s| s.to_string_lossy().to_string());

    let mut counter: u64 = 1;
    loop {
        let name = match &ext {
            Some(ext) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", stem, counter),
        };
        let candidate = dir.join(name);
        if !exists(&candidate) {
            log::debug!("自動重新命名：{} -> {}", path.display(), candidate.display());
            return candidate;
        }
        counter += 1;
    }
}
