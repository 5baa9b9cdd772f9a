use serde::{Deserialize, Serialize};
use std::fmt;

/// 書籍ID - 在庫マップのキー
///
/// 不透明な文字列。タイトルや著者はこのコンテキストでは扱わない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// 利用者ID - 会員コンテキストへの参照
///
/// 台帳は利用者を保存しない。外部サービスへの受け渡しと
/// 返却時の照合にのみ使われる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_display_is_raw_value() {
        let id = BookId::new("book01");
        assert_eq!(id.to_string(), "book01");
        assert_eq!(format!("[{}]", id), "[book01]");
    }

    #[test]
    fn test_book_id_equality_by_value() {
        assert_eq!(BookId::from("book01"), BookId::new(String::from("book01")));
        assert_ne!(BookId::from("book01"), BookId::from("book02"));
    }

    #[test]
    fn test_user_id_serializes_as_plain_string() {
        let id = UserId::from("user01");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"user01\"");

        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
