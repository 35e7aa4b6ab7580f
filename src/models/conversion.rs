use std::path::{Path, PathBuf};
use crate::error::ValidationError;
use crate::models::format::AudioFormat;

// 使用者提供的原始欄位，尚未驗證
#[derive(Clone, Debug)]
pub struct ConversionInput {
    pub input_path: String,
    pub output_dir: String,
    pub format: AudioFormat,
}

/// 通過驗證的轉換請求，建立後不可變更
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    input_path: PathBuf,
    output_dir: PathBuf,
    format: AudioFormat,
}

impl ConversionRequest {
    pub fn new(input_path: PathBuf, output_dir: PathBuf, format: AudioFormat) -> Self {
        ConversionRequest { input_path, output_dir, format }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }
}

/// 一次轉換流程的結果，回報給顯示層後即丟棄
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted { final_path: PathBuf },
    Skipped { path: PathBuf },
    Failed { error_detail: String },
    Rejected(ValidationError),
}

impl ConversionOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }

    /// 成功或略過時的輸出路徑
    pub fn final_path(&self) -> Option<&Path> {
        match self {
            ConversionOutcome::Converted { final_path } => Some(final_path),
            ConversionOutcome::Skipped { path } => Some(path),
            _ => None,
        }
    }

    pub fn error_detail(&self) -> Option<String> {
        match self {
            ConversionOutcome::Failed { error_detail } => Some(error_detail.clone()),
            ConversionOutcome::Rejected(err) => Some(err.to_string()),
            _ => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ConversionOutcome::Skipped { .. })
    }
}
