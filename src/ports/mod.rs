pub mod notification_service;
pub mod user_service;

pub use notification_service::*;
pub use user_service::*;

/// ポート共通のResult型
///
/// 外部サービスの失敗は台帳で握りつぶさず、呼び出し元へ伝播させる。
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
