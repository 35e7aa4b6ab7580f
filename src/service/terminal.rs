use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use dialoguer::Select;
use log::info;
use crate::facade::ports::facade_ports::DisplayPort;
use crate::models::conflict::ConflictDecision;
use crate::models::conversion::ConversionOutcome;
use crate::utils::utils::{format_file_size, get_file_name, BusyIndicator};

const CONFLICT_CHOICES: [(&str, ConflictDecision); 3] = [
    ("覆寫 - 取代已存在的檔案", ConflictDecision::Overwrite),
    ("自動重新命名 - 加上數字後綴", ConflictDecision::AutoRename),
    ("略過 - 不進行轉換", ConflictDecision::Skip),
];

/// 終端機顯示層：dialoguer 詢問、indicatif 忙碌指示、文字回報結果
pub struct TerminalDisplay {
    no_progress: bool,
    busy: Mutex<Option<BusyIndicator>>,
}

impl TerminalDisplay {
    pub fn new(no_progress: bool) -> Self {
        TerminalDisplay {
            no_progress,
            busy: Mutex::new(None),
        }
    }
}

impl DisplayPort for TerminalDisplay {
    fn prompt_conflict(&self, path: &Path) -> io::Result<ConflictDecision> {
        println!("{} 已存在！", get_file_name(path));
        let items: Vec<&str> = CONFLICT_CHOICES.iter().map(|(label, _)| *label).collect();
        let choice = Select::new()
            .with_prompt("請選擇處理方式（使用方向鍵選擇，按 Enter 確認）")
            .items(&items)
            .default(2)
            .interact()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("衝突處理選擇失敗: {}", e)))?;
        Ok(CONFLICT_CHOICES[choice].1)
    }

    fn show_busy(&self, input_name: &str, format_label: &str) {
        let message = format!("正在將 {} 轉換為 {}，請稍候…", input_name, format_label);
        if let Ok(mut slot) = self.busy.lock() {
            *slot = Some(BusyIndicator::start(message, self.no_progress));
        }
    }

    fn hide_busy(&self) {
        if let Ok(mut slot) = self.busy.lock() {
            if let Some(busy) = slot.take() {
                busy.finish();
            }
        }
    }

    fn report_outcome(&self, outcome: &ConversionOutcome) {
        match outcome {
            ConversionOutcome::Converted { final_path } => {
                let size = fs::metadata(final_path)
                    .map(|m| format!("，大小：{}", format_file_size(m.len())))
                    .unwrap_or_default();
                info!("轉換完成：{}", final_path.display());
                println!("轉換完成！已儲存至：{}{}", final_path.display(), size);
            }
            ConversionOutcome::Skipped { path } => {
                info!("已略過：{}", path.display());
                println!("已略過轉換，檔案已存在：{}", get_file_name(path));
            }
            ConversionOutcome::Failed { error_detail } => {
                eprintln!("轉換失敗：{}", error_detail);
            }
            ConversionOutcome::Rejected(err) => {
                eprintln!("無效的輸入：{}", err);
            }
        }
    }
}
