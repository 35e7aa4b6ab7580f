use std::io;
use std::path::Path;
use crate::models::conflict::ConflictDecision;
use crate::models::conversion::ConversionOutcome;

// 顯示層的 Port，由流程協調者呼叫
pub trait DisplayPort: Send + Sync {
    /// 輸出檔案已存在時詢問使用者（阻塞）
    fn prompt_conflict(&self, path: &Path) -> io::Result<ConflictDecision>;

    /// 轉換期間顯示忙碌狀態
    fn show_busy(&self, input_name: &str, format_label: &str);

    fn hide_busy(&self);

    /// 每次請求結束時呼叫一次
    fn report_outcome(&self, outcome: &ConversionOutcome);
}
