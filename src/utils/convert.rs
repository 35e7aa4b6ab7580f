use std::io;
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutcome};
use crate::service::conflict::ConflictPolicy;
use crate::service::ffmpeg::FfmpegService;
use crate::service::terminal::TerminalDisplay;

// 轉換適配器：依配置組裝終端機顯示層與 ffmpeg 服務
pub struct ConversionAdapter;

impl ConversionAdapter {
    pub fn build_facade(config: &AppConfig) -> ConversionFacade {
        ConversionFacade::new(
            Box::new(TerminalDisplay::new(config.no_progress)),
            Box::new(FfmpegService::new(&config.ffmpeg_path, &config.ffmpeg_log_level)),
            ConflictPolicy::new(config.on_conflict),
        )
    }
}

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutcome> {
        let facade = Self::build_facade(&config);
        facade.execute_conversion(ConversionInput {
            input_path: config.input,
            output_dir: config.output,
            format: config.format,
        })
    }
}
