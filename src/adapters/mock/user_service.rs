use crate::domain::value_objects::UserId;
use crate::ports::{Result, UserService as UserServiceTrait};
use std::collections::HashSet;
use std::sync::Mutex;

/// UserServiceのモック実装
///
/// 有効な利用者IDを保存することで状態を持ったテストをサポート。
/// 登録されるまで利用者は無効として扱う。
pub struct UserService {
    active_users: Mutex<HashSet<UserId>>,
}

impl UserService {
    pub fn new() -> Self {
        Self {
            active_users: Mutex::new(HashSet::new()),
        }
    }

    /// 指定した利用者を有効にした状態で作成
    pub fn with_active_users(users: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            active_users: Mutex::new(users.into_iter().collect()),
        }
    }

    /// 利用者を有効にする
    pub fn activate(&self, user_id: UserId) {
        self.active_users.lock().unwrap().insert(user_id);
    }

    /// 利用者を無効にする
    pub fn deactivate(&self, user_id: &UserId) {
        self.active_users.lock().unwrap().remove(user_id);
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}

impl UserServiceTrait for UserService {
    /// 有効な利用者として登録されているかチェック
    fn is_user_active(&self, user_id: &UserId) -> Result<bool> {
        Ok(self.active_users.lock().unwrap().contains(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_are_inactive_by_default() {
        let service = UserService::new();
        assert!(!service.is_user_active(&UserId::from("user01")).unwrap());
    }

    #[test]
    fn test_activate_and_deactivate() {
        let service = UserService::with_active_users([UserId::from("user01")]);
        assert!(service.is_user_active(&UserId::from("user01")).unwrap());

        service.deactivate(&UserId::from("user01"));
        assert!(!service.is_user_active(&UserId::from("user01")).unwrap());

        service.activate(UserId::from("user02"));
        assert!(service.is_user_active(&UserId::from("user02")).unwrap());
    }
}
