use std::io;
use crate::config::config::default_output_dir;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::models::format::AudioFormat;

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：只需輸入檔案，輸出至同一目錄、MP3 格式、衝突時詢問
pub struct DefaultConfigAdapter {
    input: String,
}

impl DefaultConfigAdapter {
    pub fn new(input: String) -> Self {
        DefaultConfigAdapter { input }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            input: self.input.clone(),
            output: default_output_dir(&self.input),
            format: AudioFormat::Mp3,
            on_conflict: None,
            ffmpeg_path: "ffmpeg".to_string(),
            ffmpeg_log_level: "error".to_string(),
            no_progress: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_adapter_saves_next_to_input() {
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new("videos/movie.mp4".to_string())));
        let config = service.get_config().unwrap();
        assert_eq!(config.output, "videos");
        assert_eq!(config.format, AudioFormat::Mp3);
        assert!(config.on_conflict.is_none());
    }
}
