use std::io;
use clap::Parser;
use crate::config::config::{default_output_dir, Cli};
use crate::action::interactive::process_interactive_mode;
use crate::utils::utils::setup_logging;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::models::conversion::ConversionOutcome;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;

pub fn process_args(args: Vec<String>) -> io::Result<ConversionOutcome> {
    match args.len() {
        1 => process_interactive_mode(),
        2 if !args[1].starts_with('-') => process_default_mode(args[1].clone()),
        _ => process_cli_mode(args),
    }
}

// 僅提供輸入檔案時使用預設配置
pub fn process_default_mode(input: String) -> io::Result<ConversionOutcome> {
    setup_logging("info")?;
    log::info!("未提供選項參數，使用預設配置：MP3 格式，儲存至輸入檔案所在目錄");
    run_with(Box::new(DefaultConfigAdapter::new(input)))
}

pub fn process_cli_mode(args: Vec<String>) -> io::Result<ConversionOutcome> {
    let cli = Cli::parse_from(args);
    setup_logging(&cli.log_level)?;
    run_with(Box::new(CliConfigAdapter::new(cli)))
}

fn run_with(config_port: Box<dyn ConfigPort>) -> io::Result<ConversionOutcome> {
    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;
    log::debug!("實際使用的配置：{:#?}", config);

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let output = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| default_output_dir(&self.cli.input));

        Ok(AppConfig {
            input: self.cli.input.clone(),
            output,
            format: self.cli.format,
            on_conflict: self.cli.on_conflict,
            ffmpeg_path: self.cli.ffmpeg.clone(),
            ffmpeg_log_level: self.cli.ffmpeg_log_level.clone(),
            no_progress: self.cli.no_progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::conflict::ConflictDecision;
    use crate::models::format::AudioFormat;

    #[test]
    fn test_cli_adapter_defaults_output_to_input_dir() {
        let cli = Cli::parse_from(["video_to_audio", "clips/movie.mp4", "--on-conflict", "skip"]);
        let config = CliConfigAdapter::new(cli).get_config().unwrap();
        assert_eq!(config.output, "clips");
        assert_eq!(config.format, AudioFormat::Mp3);
        assert_eq!(config.on_conflict, Some(ConflictDecision::Skip));
    }

    #[test]
    fn test_cli_adapter_keeps_explicit_output() {
        let cli = Cli::parse_from(["video_to_audio", "movie.mp4", "-o", "/tmp/out", "-f", "wav", "--no-progress"]);
        let config = CliConfigAdapter::new(cli).get_config().unwrap();
        assert_eq!(config.output, "/tmp/out");
        assert_eq!(config.format, AudioFormat::Wav);
        assert!(config.no_progress);
    }
}
