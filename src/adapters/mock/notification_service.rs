use crate::domain::value_objects::UserId;
use crate::ports::{NotificationService as NotificationServiceTrait, Result};
use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// 送信済み通知の記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub user_id: UserId,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// NotificationServiceのモック実装
///
/// 実際には配信せず、送信内容を記録してログに出力する。
/// テストから送信履歴を検証できる。
pub struct NotificationService {
    sent: Mutex<Vec<SentNotification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// 送信済みの通知すべて（送信順）
    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }

    /// 指定した利用者宛ての通知メッセージ（送信順）
    pub fn sent_to(&self, user_id: &UserId) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|n| &n.user_id == user_id)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationServiceTrait for NotificationService {
    /// 通知を記録する
    fn notify_user(&self, user_id: &UserId, message: &str) -> Result<()> {
        let notification = SentNotification {
            user_id: user_id.clone(),
            message: message.to_string(),
            sent_at: Utc::now(),
        };

        tracing::info!(
            %user_id,
            body = message,
            sent_at = %notification.sent_at.to_rfc3339(),
            "notification sent"
        );

        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}
