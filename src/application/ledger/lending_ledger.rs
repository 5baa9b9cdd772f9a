use crate::domain::{self, BookId, Inventory, LateFeeError, LendingNotice, UserId};
use crate::ports::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::errors::{LendingError, Result};

/// サービスの依存関係
///
/// 外部サービスはすべてポート経由で注入する。
/// テストではインメモリ実装に差し替える。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub user_service: Arc<dyn UserService>,
    pub notification_service: Arc<dyn NotificationService>,
}

/// 貸出台帳
///
/// 在庫（書籍ごとの貸出可能冊数）を所有し、貸出・返却の判断を行う。
/// プロセス全体で共有される状態は持たない。台帳のインスタンスごとに在庫を持つ。
///
/// すべての操作は同期的に完了する。複数スレッドから使う場合は
/// 呼び出し側で台帳全体をロックすること。
pub struct LendingLedger {
    deps: ServiceDependencies,
    inventory: Inventory,
}

impl LendingLedger {
    pub fn new(deps: ServiceDependencies) -> Self {
        Self {
            deps,
            inventory: Inventory::new(),
        }
    }

    /// 在庫を追加する
    ///
    /// `quantity`が0以下の場合は何もしない（エラーにもしない）。
    pub fn add_book(&mut self, book_id: &BookId, quantity: i64) {
        if quantity <= 0 {
            tracing::debug!(%book_id, quantity, "ignoring non-positive quantity");
            return;
        }

        let copies = self.inventory.add(book_id, quantity);
        tracing::debug!(%book_id, quantity, copies, "book copies added");
    }

    /// 貸出可能冊数を取得する
    ///
    /// 一度も登録されていない書籍は0。
    pub fn get_available_copies(&self, book_id: &BookId) -> u64 {
        self.inventory.available(book_id)
    }

    /// 書籍を貸し出す
    ///
    /// ビジネスルール（この順に確認）：
    /// 1. 利用者のアカウントが有効であること（無効なら通知して`false`）
    /// 2. 貸出可能冊数が1以上であること（なければ通知せず`false`）
    ///
    /// 成功時は在庫を1減らし、利用者に貸出通知を送って`true`を返す。
    ///
    /// # エラー
    /// 外部サービスの障害はそのまま伝播する（再試行しない）。
    pub fn borrow_book(&mut self, book_id: &BookId, user_id: &UserId) -> Result<bool> {
        // 1. 利用者の有効性確認
        let active = self
            .deps
            .user_service
            .is_user_active(user_id)
            .map_err(LendingError::UserServiceError)?;

        if !active {
            tracing::warn!(%book_id, %user_id, "borrow rejected: user is not active");
            self.notify(user_id, LendingNotice::AccountNotActive)?;
            return Ok(false);
        }

        // 2. 在庫確認と引当
        if !self.inventory.check_out(book_id, user_id) {
            tracing::warn!(%book_id, %user_id, "borrow rejected: no copies available");
            return Ok(false);
        }

        // 3. 貸出通知
        self.notify(user_id, LendingNotice::Borrowed(book_id.clone()))?;

        tracing::info!(
            %book_id,
            %user_id,
            copies = self.inventory.available(book_id),
            "book borrowed"
        );
        Ok(true)
    }

    /// 書籍を返却する
    ///
    /// ビジネスルール：
    /// - 一度も登録されていない書籍は返却不可
    /// - 利用者がその書籍を借りていない場合は返却不可
    /// - 利用者の有効性は確認しない
    ///
    /// 成功時は在庫を1増やし、利用者に返却通知を送って`true`を返す。
    pub fn return_book(&mut self, book_id: &BookId, user_id: &UserId) -> Result<bool> {
        if !self.inventory.is_registered(book_id) {
            tracing::warn!(%book_id, %user_id, "return rejected: unknown book");
            return Ok(false);
        }

        if !self.inventory.check_in(book_id, user_id) {
            tracing::warn!(%book_id, %user_id, "return rejected: no outstanding loan");
            return Ok(false);
        }

        self.notify(user_id, LendingNotice::Returned(book_id.clone()))?;

        tracing::info!(
            %book_id,
            %user_id,
            copies = self.inventory.available(book_id),
            "book returned"
        );
        Ok(true)
    }

    /// 動的延滞料金を計算する
    ///
    /// 台帳の状態には依存しない。詳細は`domain::late_fee`を参照。
    pub fn calculate_dynamic_late_fee(
        &self,
        overdue_days: i64,
        is_bestseller: bool,
        is_premium_member: bool,
    ) -> std::result::Result<Decimal, LateFeeError> {
        domain::calculate_dynamic_late_fee(overdue_days, is_bestseller, is_premium_member)
    }

    fn notify(&self, user_id: &UserId, notice: LendingNotice) -> Result<()> {
        self.deps
            .notification_service
            .notify_user(user_id, &notice.to_string())
            .map_err(LendingError::NotificationServiceError)
    }
}
