use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use log::{debug, info};
use crate::error::ConversionFailure;
use crate::service::traits::i_service::ConverterServiceTrait;

/// ffmpeg 轉換服務，同步執行一次外部程序並實現 ConverterServiceTrait
pub struct FfmpegService {
    ffmpeg_path: PathBuf,
    log_level: String,
}

impl FfmpegService {
    pub fn new(ffmpeg_path: impl Into<PathBuf>, log_level: impl Into<String>) -> Self {
        FfmpegService {
            ffmpeg_path: ffmpeg_path.into(),
            log_level: log_level.into(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new("ffmpeg", "error")
    }

    /// 組合 ffmpeg 參數；-y 表示直接覆寫輸出檔案
    pub fn build_args(&self, input_path: &Path, output_path: &Path) -> Vec<String> {
        vec![
            "-hide_banner".to_string(),
            "-nostdin".to_string(),
            "-loglevel".to_string(),
            self.log_level.clone(),
            "-y".to_string(),
            "-i".to_string(),
            input_path.to_string_lossy().to_string(),
            output_path.to_string_lossy().to_string(),
        ]
    }
}

impl ConverterServiceTrait for FfmpegService {
    fn convert(&self, input_path: &Path, output_path: &Path) -> Result<(), ConversionFailure> {
        let args = self.build_args(input_path, output_path);
        debug!("執行 {} {}", self.ffmpeg_path.display(), args.join(" "));

        let output = Command::new(&self.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ConversionFailure::new(e.to_string()))?;

        if output.status.success() {
            info!("ffmpeg 轉換完成：{}", output_path.display());
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.trim_end();
        if detail.is_empty() {
            Err(ConversionFailure::new(format!("ffmpeg 異常結束（{}）", output.status)))
        } else {
            Err(ConversionFailure::new(detail))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args_overwrites_output() {
        let service = FfmpegService::with_defaults();
        let args = service.build_args(Path::new("/in/movie.mp4"), Path::new("/out/movie.mp3"));
        assert!(args.contains(&"-y".to_string()));
        let i = args.iter().position(|a| a == "-i").unwrap();
        assert_eq!(args[i + 1], "/in/movie.mp4");
        assert_eq!(args.last().unwrap(), "/out/movie.mp3");
    }

    #[test]
    fn test_missing_binary_reports_os_error() {
        let service = FfmpegService::new("/nonexistent/bin/ffmpeg-missing", "error");
        let err = service
            .convert(Path::new("/in/movie.mp4"), Path::new("/out/movie.mp3"))
            .unwrap_err();
        assert!(!err.detail.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_returns_stderr_verbatim() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-ffmpeg");
        fs::write(&script, "#!/bin/sh\necho 'codec not supported' >&2\nexit 1\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let service = FfmpegService::new(&script, "error");
        let err = service
            .convert(Path::new("movie.mp4"), &dir.path().join("movie.mp3"))
            .unwrap_err();
        assert_eq!(err.detail, "codec not supported");
    }

    #[cfg(unix)]
    #[test]
    fn test_silent_failure_names_status() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-ffmpeg");
        fs::write(&script, "#!/bin/sh\nexit 3\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let err = FfmpegService::new(&script, "error")
            .convert(Path::new("movie.mp4"), &dir.path().join("movie.mp3"))
            .unwrap_err();
        assert!(err.detail.contains('3'));
    }
}
