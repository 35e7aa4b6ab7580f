use clap::ValueEnum;
use std::path::{Path, PathBuf};

// 輸出檔案已存在時的處理方式
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConflictDecision {
    /// 覆寫已存在的檔案
    Overwrite,
    /// 自動重新命名，例如 movie_1.mp3
    #[value(name = "rename")]
    AutoRename,
    /// 略過，不進行轉換
    Skip,
}

/// 衝突處理結果；覆寫與重新命名帶有最終輸出路徑
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictResolution {
    Overwrite(PathBuf),
    Rename(PathBuf),
    Skip,
}

impl ConflictResolution {
    pub fn decision(&self) -> ConflictDecision {
        match self {
            ConflictResolution::Overwrite(_) => ConflictDecision::Overwrite,
            ConflictResolution::Rename(_) => ConflictDecision::AutoRename,
            ConflictResolution::Skip => ConflictDecision::Skip,
        }
    }

    pub fn resolved_path(&self) -> Option<&Path> {
        match self {
            ConflictResolution::Overwrite(path) | ConflictResolution::Rename(path) => Some(path),
            ConflictResolution::Skip => None,
        }
    }
}
