use dialoguer::{Confirm, Input, Select};
use std::io;

use crate::config::config::{default_output_dir, validate_input_path, validate_output_dir};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::models::conversion::ConversionOutcome;
use crate::models::format::AudioFormat;
use crate::service::config_service::ConfigService;
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> io::Result<ConversionOutcome> {
    println!("=== 歡迎使用互動模式：將 MP4 影片轉換為音訊 ===");
    setup_logging("warn")?;

    loop {
        let config_service = ConfigService::new(Box::new(InteractiveConfigAdapter));
        let config = config_service.get_config()?;
        let outcome = ConversionAdapter.execute(config)?;

        if !get_continue_option()? {
            return Ok(outcome);
        }
    }
}

// 互動配置適配器，逐項詢問使用者
pub struct InteractiveConfigAdapter;

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let input = get_input_path()?;
        let output = get_output_path(&input)?;
        let format = get_output_format()?;
        Ok(AppConfig {
            input,
            output,
            format,
            on_conflict: None,
            ffmpeg_path: "ffmpeg".to_string(),
            ffmpeg_log_level: "error".to_string(),
            no_progress: false,
        })
    }
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入 MP4 檔案路徑（例如：./movie.mp4）")
        .validate_with(|input: &String| -> Result<(), String> {
            validate_input_path(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_path(input: &str) -> io::Result<String> {
    Input::new()
        .with_prompt("輸入儲存位置（預設為輸入檔案所在目錄）")
        .default(default_output_dir(input))
        .validate_with(|output: &String| -> Result<(), String> {
            validate_output_dir(output).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_format() -> io::Result<AudioFormat> {
    let items: Vec<&str> = AudioFormat::ALL.iter().map(|f| f.label()).collect();
    let choice = Select::new()
        .with_prompt("選擇輸出格式（使用方向鍵選擇，按 Enter 確認）")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出格式選擇失敗: {}", e)))?;
    Ok(AudioFormat::ALL[choice])
}

pub fn get_continue_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否繼續轉換其他檔案？")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("繼續選項輸入失敗: {}", e)))
}
