use std::collections::HashMap;

use super::{BookId, UserId};

/// 在庫台帳（書籍ごとの貸出可能冊数と未返却の貸出）
///
/// 不変条件：
/// - 貸出可能冊数は常に0以上（`u64`で保証）
/// - キーが存在しない書籍は貸出可能冊数0と同じ
/// - 未返却の貸出は、`check_out`が成功した回数から`check_in`が成功した回数を
///   引いた分だけ存在する
///
/// 外部サービスは呼ばない。通知などの副作用はアプリケーション層の責務。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    available: HashMap<BookId, u64>,
    outstanding: HashMap<BookId, Vec<UserId>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在庫を追加する
    ///
    /// `quantity`が0以下の場合は何もしない。
    /// 戻り値は追加後の貸出可能冊数。
    pub fn add(&mut self, book_id: &BookId, quantity: i64) -> u64 {
        if quantity <= 0 {
            return self.available(book_id);
        }

        let copies = self.available.entry(book_id.clone()).or_insert(0);
        *copies = copies.saturating_add(quantity as u64);
        *copies
    }

    /// 貸出可能冊数
    pub fn available(&self, book_id: &BookId) -> u64 {
        self.available.get(book_id).copied().unwrap_or(0)
    }

    /// 一度でも在庫登録されたか
    pub fn is_registered(&self, book_id: &BookId) -> bool {
        self.available.contains_key(book_id)
    }

    /// 利用者が未返却で保持している冊数
    #[cfg(test)]
    fn outstanding_for(&self, book_id: &BookId, user_id: &UserId) -> usize {
        self.outstanding
            .get(book_id)
            .map(|holders| holders.iter().filter(|holder| *holder == user_id).count())
            .unwrap_or(0)
    }

    /// 1冊貸し出す
    ///
    /// 貸出可能冊数が0の場合は`false`を返し、状態は変更しない。
    pub fn check_out(&mut self, book_id: &BookId, user_id: &UserId) -> bool {
        match self.available.get_mut(book_id) {
            Some(copies) if *copies > 0 => {
                *copies -= 1;
                self.outstanding
                    .entry(book_id.clone())
                    .or_default()
                    .push(user_id.clone());
                true
            }
            _ => false,
        }
    }

    /// 1冊返却を受け付ける
    ///
    /// 未登録の書籍、または利用者が保持していない書籍の場合は`false`を返し、
    /// 状態は変更しない。
    pub fn check_in(&mut self, book_id: &BookId, user_id: &UserId) -> bool {
        let Some(copies) = self.available.get_mut(book_id) else {
            return false;
        };

        let Some(holders) = self.outstanding.get_mut(book_id) else {
            return false;
        };

        let Some(position) = holders.iter().position(|holder| holder == user_id) else {
            return false;
        };

        holders.swap_remove(position);
        if holders.is_empty() {
            self.outstanding.remove(book_id);
        }

        *copies += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> BookId {
        BookId::from("book01")
    }

    fn user() -> UserId {
        UserId::from("user01")
    }

    #[test]
    fn test_unknown_book_has_no_copies() {
        let inventory = Inventory::new();
        assert_eq!(inventory.available(&book()), 0);
        assert!(!inventory.is_registered(&book()));
    }

    #[test]
    fn test_add_accumulates() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.add(&book(), 1), 1);
        assert_eq!(inventory.add(&book(), 2), 3);
        assert_eq!(inventory.available(&book()), 3);
    }

    #[test]
    fn test_add_non_positive_is_noop() {
        let mut inventory = Inventory::new();
        inventory.add(&book(), 0);
        inventory.add(&book(), -5);
        assert!(!inventory.is_registered(&book()));

        inventory.add(&book(), 2);
        inventory.add(&book(), -1);
        assert_eq!(inventory.available(&book()), 2);
    }

    #[test]
    fn test_check_out_until_empty() {
        let mut inventory = Inventory::new();
        inventory.add(&book(), 2);

        assert!(inventory.check_out(&book(), &user()));
        assert!(inventory.check_out(&book(), &user()));
        assert!(!inventory.check_out(&book(), &user()));
        assert_eq!(inventory.available(&book()), 0);
        assert_eq!(inventory.outstanding_for(&book(), &user()), 2);
    }

    #[test]
    fn test_check_out_unknown_book_fails() {
        let mut inventory = Inventory::new();
        assert!(!inventory.check_out(&book(), &user()));
        assert_eq!(inventory, Inventory::new());
    }

    #[test]
    fn test_check_in_requires_holder() {
        let mut inventory = Inventory::new();
        inventory.add(&book(), 1);
        assert!(inventory.check_out(&book(), &user()));

        assert!(!inventory.check_in(&book(), &UserId::from("user02")));
        assert_eq!(inventory.available(&book()), 0);

        assert!(inventory.check_in(&book(), &user()));
        assert_eq!(inventory.available(&book()), 1);
        assert_eq!(inventory.outstanding_for(&book(), &user()), 0);

        // 同じ貸出を二重に返却することはできない
        assert!(!inventory.check_in(&book(), &user()));
        assert_eq!(inventory.available(&book()), 1);
    }

    #[test]
    fn test_check_in_unknown_book_fails() {
        let mut inventory = Inventory::new();
        assert!(!inventory.check_in(&book(), &user()));
        assert!(!inventory.is_registered(&book()));
    }
}
