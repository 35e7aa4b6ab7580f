use std::path::PathBuf;
use thiserror::Error;

/// 請求驗證失敗，不會進行任何轉換
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("輸入檔案 '{}' 不存在", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("輸入路徑 '{}' 不是檔案", .path.display())]
    InputNotAFile { path: PathBuf },

    #[error("輸入檔案 '{}' 不是有效的 .{} 檔案", .path.display(), .expected)]
    UnsupportedSource { path: PathBuf, expected: &'static str },

    #[error("儲存位置 '{}' 不是有效的目錄", .path.display())]
    OutputDirInvalid { path: PathBuf },
}

/// 外部轉換器失敗，保留原始診斷訊息
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct ConversionFailure {
    pub detail: String,
}

impl ConversionFailure {
    pub fn new(detail: impl Into<String>) -> Self {
        ConversionFailure { detail: detail.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_displays_detail_verbatim() {
        let err = ConversionFailure::new("codec not supported");
        assert_eq!(err.to_string(), "codec not supported");
    }

    #[test]
    fn test_validation_message_names_path() {
        let err = ValidationError::UnsupportedSource {
            path: PathBuf::from("clip.avi"),
            expected: "mp4",
        };
        let msg = err.to_string();
        assert!(msg.contains("clip.avi"));
        assert!(msg.contains(".mp4"));
    }
}
