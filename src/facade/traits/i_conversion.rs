use std::io;
use crate::models::conversion::{ConversionInput, ConversionOutcome};

// Facade 接口，負責協調單次轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 執行一次轉換：驗證、推導路徑、處理衝突、呼叫轉換器並回報結果
    /// # 參數
    /// - input: 使用者提供的原始欄位
    /// # 回傳
    /// - 已回報給顯示層的結果；顯示層詢問失敗也會以失敗結果回報
    fn execute_conversion(&self, input: ConversionInput) -> io::Result<ConversionOutcome>;
}
