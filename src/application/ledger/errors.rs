use thiserror::Error;

/// 貸出台帳アプリケーション層のエラー
///
/// 貸出不可や返却不可といったビジネスルール上の拒否はエラーではなく
/// `Ok(false)`で表す。ここに含まれるのは外部サービスの障害のみ。
#[derive(Debug, Error)]
pub enum LendingError {
    /// UserServiceのエラー
    #[error("User service error")]
    UserServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// NotificationServiceのエラー
    #[error("Notification service error")]
    NotificationServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LendingError>;
