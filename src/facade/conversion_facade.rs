use std::io;
use std::path::PathBuf;
use log::{debug, info, warn};
use crate::config::config::{validate_input_path, validate_output_dir};
use crate::error::ValidationError;
use crate::facade::ports::facade_ports::DisplayPort;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conflict::ConflictResolution;
use crate::models::conversion::{ConversionInput, ConversionOutcome, ConversionRequest};
use crate::service::conflict::ConflictPolicy;
use crate::service::resolver::derive_output_path;
use crate::service::traits::i_service::ConverterServiceTrait;

/// 單次轉換流程所處的階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStage {
    Validating,
    ResolvingPath,
    CheckingConflict,
    Converting,
    Reporting,
}

pub struct ConversionFacade {
    display: Box<dyn DisplayPort>,
    converter: Box<dyn ConverterServiceTrait>,
    conflict_policy: ConflictPolicy,
}

impl ConversionFacade {
    pub fn new(
        display: Box<dyn DisplayPort>,
        converter: Box<dyn ConverterServiceTrait>,
        conflict_policy: ConflictPolicy,
    ) -> Self {
        ConversionFacade {
            display,
            converter,
            conflict_policy,
        }
    }

    fn enter(&self, stage: ConversionStage) {
        debug!("轉換階段：{:?}", stage);
    }

    fn validate(&self, input: &ConversionInput) -> Result<ConversionRequest, ValidationError> {
        let input_path = validate_input_path(&input.input_path)?;
        let output_dir = validate_output_dir(&input.output_dir)?;
        Ok(ConversionRequest::new(input_path, output_dir, input.format))
    }

    /// 依請求執行到結果為止，不負責回報
    fn run(&self, input: ConversionInput) -> ConversionOutcome {
        self.enter(ConversionStage::Validating);
        let request = match self.validate(&input) {
            Ok(request) => request,
            Err(err) => return ConversionOutcome::Rejected(err),
        };

        self.enter(ConversionStage::ResolvingPath);
        let mut output_path: PathBuf =
            derive_output_path(request.input_path(), request.output_dir(), request.format());

        if output_path.exists() {
            self.enter(ConversionStage::CheckingConflict);
            let resolution = match self.conflict_policy.resolve_conflict(&output_path, &*self.display) {
                Ok(resolution) => resolution,
                Err(err) => {
                    warn!("無法取得衝突處理方式：{}", err);
                    return ConversionOutcome::Failed {
                        error_detail: format!("無法取得衝突處理方式: {}", err),
                    };
                }
            };
            match resolution {
                ConflictResolution::Skip => {
                    info!("輸出檔案已存在，略過轉換：{}", output_path.display());
                    return ConversionOutcome::Skipped { path: output_path };
                }
                ConflictResolution::Overwrite(path) | ConflictResolution::Rename(path) => {
                    info!("輸出檔案已存在，輸出至：{}", path.display());
                    output_path = path;
                }
            }
        }

        self.enter(ConversionStage::Converting);
        let input_name = request
            .input_path()
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        info!(
            "開始轉換，輸入檔案：{}，輸出檔案：{}，格式：{}",
            request.input_path().display(),
            output_path.display(),
            request.format().label()
        );

        self.display.show_busy(&input_name, request.format().label());
        let result = self.converter.convert(request.input_path(), &output_path);
        self.display.hide_busy();

        match result {
            Ok(()) => ConversionOutcome::Converted { final_path: output_path },
            Err(failure) => {
                warn!("轉換失敗：{}", failure);
                ConversionOutcome::Failed { error_detail: failure.detail }
            }
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: ConversionInput) -> io::Result<ConversionOutcome> {
        let outcome = self.run(input);
        self.enter(ConversionStage::Reporting);
        self.display.report_outcome(&outcome);
        Ok(outcome)
    }
}
