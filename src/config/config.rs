use clap::Parser;
use std::path::{Path, PathBuf};
use crate::error::ValidationError;
use crate::models::conflict::ConflictDecision;
use crate::models::format::{AudioFormat, SOURCE_EXTENSION};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "video_to_audio",
    about = "將 MP4 影片轉換為 MP3 或 WAV 音訊",
    long_about = "使用 ffmpeg 將 MP4 影片轉換為音訊檔案，支援 MP3 與 WAV 兩種輸出格式。\n輸出檔案已存在時可選擇覆寫、自動重新命名或略過。\n不帶任何參數執行時進入互動模式。使用 `--help` 查看詳細用法。"
)]
pub struct Cli {
    /// 輸入的 MP4 檔案
    pub input: String,
    /// 儲存位置，預設為輸入檔案所在目錄
    #[arg(short, long)]
    pub output: Option<String>,
    #[arg(short, long, value_enum, default_value_t = AudioFormat::Mp3)]
    pub format: AudioFormat,
    /// 輸出檔案已存在時的處理方式，未指定時詢問
    #[arg(long, value_enum)]
    pub on_conflict: Option<ConflictDecision>,
    #[arg(long, default_value = "ffmpeg")]
    pub ffmpeg: String,
    #[arg(long, default_value = "error", value_parser = ["quiet", "panic", "fatal", "error", "warning", "info", "verbose", "debug"])]
    pub ffmpeg_log_level: String,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

/// 檢查檔名是否以 .mp4 結尾（不分大小寫），名為 `.mp4` 的檔案也算
pub fn has_source_extension(path: &Path) -> bool {
    let suffix = format!(".{}", SOURCE_EXTENSION);
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(&suffix))
        .unwrap_or(false)
}

pub fn validate_input_path(input: &str) -> Result<PathBuf, ValidationError> {
    let path = PathBuf::from(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(ValidationError::InputNotFound { path });
    }
    if !path.is_file() {
        log::error!("輸入路徑不是檔案：{}", input);
        return Err(ValidationError::InputNotAFile { path });
    }
    if !has_source_extension(&path) {
        log::error!("輸入檔案不是 .{} 檔案：{}", SOURCE_EXTENSION, input);
        return Err(ValidationError::UnsupportedSource { path, expected: SOURCE_EXTENSION });
    }
    Ok(path)
}

pub fn validate_output_dir(output: &str) -> Result<PathBuf, ValidationError> {
    let path = PathBuf::from(output);
    if !path.is_dir() {
        log::error!("儲存位置不是有效的目錄：{}", output);
        return Err(ValidationError::OutputDirInvalid { path });
    }
    Ok(path)
}

/// 預設儲存位置：輸入檔案所在的目錄
pub fn default_output_dir(input: &str) -> String {
    match Path::new(input).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().to_string(),
        _ => ".".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_has_source_extension_ignores_case() {
        assert!(has_source_extension(Path::new("movie.mp4")));
        assert!(has_source_extension(Path::new("MOVIE.MP4")));
        assert!(!has_source_extension(Path::new("movie.mkv")));
        assert!(!has_source_extension(Path::new("mp4")));
        assert!(!has_source_extension(Path::new("movie.mp4.part")));
    }

    #[test]
    fn test_bare_dot_mp4_name_is_accepted() {
        assert!(has_source_extension(Path::new("/videos/.mp4")));
        assert!(has_source_extension(Path::new(".MP4")));

        let dir = tempfile::tempdir().unwrap();
        let hidden = dir.path().join(".mp4");
        fs::write(&hidden, b"").unwrap();
        assert_eq!(validate_input_path(hidden.to_str().unwrap()).unwrap(), hidden);
    }

    #[test]
    fn test_validate_input_path() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        let text = dir.path().join("notes.txt");
        fs::write(&video, b"").unwrap();
        fs::write(&text, b"").unwrap();

        assert_eq!(validate_input_path(video.to_str().unwrap()).unwrap(), video);
        assert!(matches!(
            validate_input_path(text.to_str().unwrap()),
            Err(ValidationError::UnsupportedSource { .. })
        ));
        assert!(matches!(
            validate_input_path(dir.path().join("missing.mp4").to_str().unwrap()),
            Err(ValidationError::InputNotFound { .. })
        ));
        assert!(matches!(
            validate_input_path(dir.path().to_str().unwrap()),
            Err(ValidationError::InputNotAFile { .. })
        ));
    }

    #[test]
    fn test_validate_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.mp3");
        fs::write(&file, b"").unwrap();

        assert!(validate_output_dir(dir.path().to_str().unwrap()).is_ok());
        assert!(validate_output_dir(file.to_str().unwrap()).is_err());
        assert!(validate_output_dir(dir.path().join("nope").to_str().unwrap()).is_err());
    }

    #[test]
    fn test_default_output_dir() {
        assert_eq!(default_output_dir("videos/movie.mp4"), "videos");
        assert_eq!(default_output_dir("movie.mp4"), ".");
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["video_to_audio", "movie.mp4", "-f", "wav", "--on-conflict", "rename"]);
        assert_eq!(cli.input, "movie.mp4");
        assert_eq!(cli.format, AudioFormat::Wav);
        assert_eq!(cli.on_conflict, Some(ConflictDecision::AutoRename));
        assert_eq!(cli.output, None);
        assert_eq!(cli.ffmpeg, "ffmpeg");
    }
}
