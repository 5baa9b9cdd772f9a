use crate::domain::value_objects::UserId;

use super::Result;

/// 利用者サービスポート
///
/// 台帳コンテキストと会員コンテキストの境界を維持する。
/// 台帳はUserIDのみを知り、会員の詳細は知らない。
pub trait UserService: Send + Sync {
    /// 利用者のアカウントが有効か確認する
    ///
    /// ビジネスルール: 無効な利用者には貸出不可。
    /// 貸出1回につき1度だけ呼ばれる。
    fn is_user_active(&self, user_id: &UserId) -> Result<bool>;
}
