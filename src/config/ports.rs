use std::io;
use crate::models::conflict::ConflictDecision;
use crate::models::conversion::ConversionOutcome;
use crate::models::format::AudioFormat;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: String,
    pub output: String,
    pub format: AudioFormat,
    pub on_conflict: Option<ConflictDecision>,
    pub ffmpeg_path: String,
    pub ffmpeg_log_level: String,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutcome>;
}
