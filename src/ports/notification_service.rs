use crate::domain::value_objects::UserId;

use super::Result;

/// 通知サービスポート
///
/// 利用者への通知配信メカニズムを抽象化する。
/// 実装はメール、SMS、プッシュ通知などが考えられる。
pub trait NotificationService: Send + Sync {
    /// 利用者にメッセージを通知する
    ///
    /// 送りっぱなし。戻り値は失敗の伝播にのみ使われる。
    fn notify_user(&self, user_id: &UserId, message: &str) -> Result<()>;
}
