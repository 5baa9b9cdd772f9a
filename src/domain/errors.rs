use thiserror::Error;

/// 延滞料金計算のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LateFeeError {
    /// 延滞日数が負の値
    #[error("Overdue days cannot be negative.")]
    NegativeOverdueDays,
}
