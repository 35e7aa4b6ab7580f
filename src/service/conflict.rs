//! 輸出檔案衝突處理

use std::io;
use std::path::Path;
use log::info;
use crate::facade::ports::facade_ports::DisplayPort;
use crate::models::conflict::{ConflictDecision, ConflictResolution};
use crate::service::resolver::next_available_name;

/// 衝突策略：有預設決定時直接採用，否則交由顯示層詢問
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictPolicy {
    preset: Option<ConflictDecision>,
}

impl ConflictPolicy {
    pub fn new(preset: Option<ConflictDecision>) -> Self {
        ConflictPolicy { preset }
    }

    /// 僅在 candidate 已存在時呼叫
    pub fn resolve_conflict(&self, candidate: &Path, display: &dyn DisplayPort) -> io::Result<ConflictResolution> {
        let decision = match self.preset {
            Some(decision) => {
                info!("輸出檔案已存在，使用預設處理方式 {:?}：{}", decision, candidate.display());
                decision
            }
            None => display.prompt_conflict(candidate)?,
        };

        Ok(match decision {
            ConflictDecision::Overwrite => ConflictResolution::Overwrite(candidate.to_path_buf()),
            ConflictDecision::AutoRename => ConflictResolution::Rename(next_available_name(candidate)),
            ConflictDecision::Skip => ConflictResolution::Skip,
        })
    }
}
