use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{BookId, UserId};

/// 在庫追加リクエスト（POST /books/:book_id/copies）
#[derive(Debug, Serialize, Deserialize)]
pub struct AddCopiesRequest {
    pub quantity: i64,
}

/// 貸出・返却リクエスト（POST /books/:book_id/borrow, /return）
#[derive(Debug, Serialize, Deserialize)]
pub struct LendingRequest {
    pub user_id: UserId,
}

/// 在庫レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub book_id: BookId,
    pub available_copies: u64,
}

/// 貸出・返却の結果
///
/// 貸出不可・返却不可はエラーではないため、`success: false`で200を返す。
#[derive(Debug, Serialize, Deserialize)]
pub struct LendingResponse {
    pub book_id: BookId,
    pub user_id: UserId,
    pub success: bool,
    pub available_copies: u64,
}

/// 延滞料金クエリ（GET /late-fee）
#[derive(Debug, Deserialize)]
pub struct LateFeeQuery {
    pub overdue_days: i64,
    #[serde(default)]
    pub bestseller: bool,
    #[serde(default)]
    pub premium_member: bool,
}

/// 延滞料金レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct LateFeeResponse {
    pub fee: Decimal,
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
