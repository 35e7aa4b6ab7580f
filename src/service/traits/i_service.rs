use std::path::Path;
use crate::error::ConversionFailure;

// 轉換服務接口，負責呼叫外部轉換器
pub trait ConverterServiceTrait: Send + Sync {
    /// 將輸入檔案轉換為輸出檔案，輸出檔案已存在時直接覆寫
    /// # 參數
    /// - input_path: 可讀取的輸入檔案
    /// - output_path: 輸出檔案，其所在目錄必須存在
    /// # 回傳
    /// - 失敗時返回外部轉換器的原始診斷訊息
    fn convert(&self, input_path: &Path, output_path: &Path) -> Result<(), ConversionFailure>;
}
