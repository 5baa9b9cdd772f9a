use crate::application::ledger::LendingError;
use crate::domain::LateFeeError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// ドメイン層・アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    Lending(LendingError),
    LateFee(LateFeeError),
}

impl From<LendingError> for ApiError {
    fn from(err: LendingError) -> Self {
        ApiError::Lending(err)
    }
}

impl From<LateFeeError> for ApiError {
    fn from(err: LateFeeError) -> Self {
        ApiError::LateFee(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400 Bad Request - 引数不正
            ApiError::LateFee(ref e @ LateFeeError::NegativeOverdueDays) => (
                StatusCode::BAD_REQUEST,
                "NEGATIVE_OVERDUE_DAYS",
                e.to_string(),
            ),

            // 500 Internal Server Error - 外部サービス障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Lending(LendingError::UserServiceError(ref e)) => {
                tracing::error!("User service error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "USER_SERVICE_ERROR",
                    "User service error".to_string(),
                )
            }
            ApiError::Lending(LendingError::NotificationServiceError(ref e)) => {
                tracing::error!("Notification service error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NOTIFICATION_SERVICE_ERROR",
                    "Notification service error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
